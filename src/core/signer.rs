use crate::core::account::create_universal_account;
use crate::core::wallet::Wallet;
use crate::domain::chain::Chain;
use crate::domain::model::UniversalAccount;
use crate::domain::ports::UniversalSigner;
use crate::utils::error::{PushMailError, Result};
use async_trait::async_trait;

/// Adapts a [`Wallet`], whose signatures come back as hex strings, to the
/// raw-bytes [`UniversalSigner`] capability.
#[derive(Debug)]
pub struct WalletSigner {
    wallet: Wallet,
    account: UniversalAccount,
}

impl WalletSigner {
    pub fn new(wallet: Wallet, chain: Chain, chain_id: &str) -> Result<Self> {
        let account = create_universal_account(chain, chain_id, wallet.address())?;
        Ok(Self { wallet, account })
    }
}

#[async_trait]
impl UniversalSigner for WalletSigner {
    fn account(&self) -> &UniversalAccount {
        &self.account
    }

    async fn sign_message(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = self.wallet.sign_message(data)?;
        hex_to_bytes(&signature)
    }
}

pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>> {
    let hex_part = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(hex_part).map_err(|e| PushMailError::SigningError {
        message: format!("signature is not valid hex: {}", e),
    })
}
