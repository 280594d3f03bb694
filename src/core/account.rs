//! Universal account construction and per-chain address checks.
//!
//! Ethereum addresses are normalized to their EIP-55 checksummed form. Solana
//! addresses are Base58 encoded 32-byte Ed25519 public keys and are kept as given.

use crate::domain::chain::Chain;
use crate::domain::model::UniversalAccount;
use crate::utils::error::{PushMailError, Result};
use sha3::{Digest, Keccak256};

pub fn create_universal_account(
    chain: Chain,
    chain_id: &str,
    address: &str,
) -> Result<UniversalAccount> {
    if chain_id.trim().is_empty() {
        return Err(PushMailError::InvalidConfigValueError {
            field: "chain_id".to_string(),
            value: chain_id.to_string(),
            reason: format!("{} chain id cannot be empty", chain),
        });
    }

    let address = match chain {
        Chain::Ethereum => {
            if !validate_evm_address(address)? {
                return Err(address_error(chain, address, "EIP-55 checksum mismatch"));
            }
            checksum_address(address)?
        }
        Chain::Solana => {
            validate_solana_address(address)?;
            address.to_string()
        }
        Chain::Push => {
            if address.trim().is_empty() {
                return Err(address_error(chain, address, "address cannot be empty"));
            }
            address.to_string()
        }
    };

    Ok(UniversalAccount {
        chain,
        chain_id: chain_id.to_string(),
        address,
    })
}

fn address_error(chain: Chain, address: &str, reason: impl Into<String>) -> PushMailError {
    PushMailError::AddressError {
        chain: chain.to_string(),
        address: address.to_string(),
        reason: reason.into(),
    }
}

fn evm_hex_part(address: &str) -> Result<&str> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| address_error(Chain::Ethereum, address, "address must start with 0x"))?;

    if hex_part.len() != 40 {
        return Err(address_error(
            Chain::Ethereum,
            address,
            format!("expected 40 hex characters, got {}", hex_part.len()),
        ));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(address_error(
            Chain::Ethereum,
            address,
            "address contains non-hex characters",
        ));
    }

    Ok(hex_part)
}

/// Returns `Ok(false)` for a well-formed address whose mixed case fails the checksum.
pub fn validate_evm_address(address: &str) -> Result<bool> {
    let hex_part = evm_hex_part(address)?;

    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());
    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    Ok(checksum_address(address)? == format!("0x{}", hex_part))
}

/// EIP-55 mixed-case encoding of a 0x-prefixed address.
pub fn checksum_address(address: &str) -> Result<String> {
    let hex_part = evm_hex_part(address)?.to_ascii_lowercase();
    let hash = Keccak256::digest(hex_part.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, c) in hex_part.chars().enumerate() {
        // 對應 nibble >= 8 時轉大寫
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    Ok(checksummed)
}

pub fn validate_solana_address(address: &str) -> Result<()> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| address_error(Chain::Solana, address, format!("base58 decode failed: {e}")))?;

    if bytes.len() != 32 {
        return Err(address_error(
            Chain::Solana,
            address,
            format!("expected 32 bytes, got {}", bytes.len()),
        ));
    }

    Ok(())
}
