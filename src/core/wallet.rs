use crate::core::account::checksum_address;
use crate::utils::error::{PushMailError, Result};
use k256::ecdsa::signature::hazmat::PrehashSigner;
use k256::ecdsa::{RecoveryId, Signature, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand_core::OsRng;
use sha3::{Digest, Keccak256};
use zeroize::Zeroizing;

/// A locally held secp256k1 key with its Ethereum address.
pub struct Wallet {
    secret: Zeroizing<[u8; 32]>,
    address: String,
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl Wallet {
    pub fn generate() -> Result<Self> {
        let secret = SecretKey::random(&mut OsRng);
        Self::from_secret(&secret)
    }

    pub fn from_private_key_hex(private_key: &str) -> Result<Self> {
        let trimmed = private_key.trim();
        let hex_part = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let bytes = Zeroizing::new(hex::decode(hex_part).map_err(|e| PushMailError::KeyError {
            message: format!("private key is not valid hex: {}", e),
        })?);
        if bytes.len() != 32 {
            return Err(PushMailError::KeyError {
                message: format!("expected 32-byte private key, got {} bytes", bytes.len()),
            });
        }

        let secret = SecretKey::from_slice(&bytes).map_err(|_| PushMailError::KeyError {
            message: "private key is not a valid secp256k1 scalar".to_string(),
        })?;
        Self::from_secret(&secret)
    }

    fn from_secret(secret: &SecretKey) -> Result<Self> {
        let point = secret.public_key().to_encoded_point(false);
        // 去掉 0x04 前綴後取 keccak 的後 20 bytes
        let hash = Keccak256::digest(&point.as_bytes()[1..]);
        let address = checksum_address(&format!("0x{}", hex::encode(&hash[12..])))?;

        let mut key = Zeroizing::new([0u8; 32]);
        key.copy_from_slice(&secret.to_bytes());

        Ok(Self {
            secret: key,
            address,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret.as_slice()))
    }

    /// EIP-191 `personal_sign`. Returns `0x` hex of `r || s || v` with v in {27, 28}.
    pub fn sign_message(&self, message: &[u8]) -> Result<String> {
        let digest = hash_message(message);

        let signing_key =
            SigningKey::from_bytes((&*self.secret).into()).map_err(|e| {
                PushMailError::SigningError {
                    message: e.to_string(),
                }
            })?;

        let (signature, recovery_id): (Signature, RecoveryId) = signing_key
            .sign_prehash(&digest)
            .map_err(|e| PushMailError::SigningError {
                message: e.to_string(),
            })?;

        let mut sig = Vec::with_capacity(65);
        sig.extend_from_slice(&signature.r().to_bytes());
        sig.extend_from_slice(&signature.s().to_bytes());
        sig.push(recovery_id.is_y_odd() as u8 + 27);

        Ok(format!("0x{}", hex::encode(sig)))
    }
}

pub fn hash_message(message: &[u8]) -> [u8; 32] {
    let prefix = format!("\x19Ethereum Signed Message:\n{}", message.len());
    let mut hasher = Keccak256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}
