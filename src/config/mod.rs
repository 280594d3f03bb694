#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::chain::chain_id;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url};

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545/rpc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_SENDER_CHAIN: &str = "ETHEREUM";
pub const DEFAULT_SENDER_CHAIN_ID: &str = chain_id::ethereum::DEVNET;
pub const DEFAULT_RECIPIENT_CHAIN: &str = "SOLANA";
pub const DEFAULT_RECIPIENT_CHAIN_ID: &str = chain_id::solana::DEVNET;
pub const DEFAULT_RECIPIENT_ADDRESS: &str = "ySYrGNLLJSK9hvGGpoxg8TzWfRe8ftBtDSMECtx2eJR";
pub const DEFAULT_CATEGORY: &str = "EMAIL";
pub const DEFAULT_TITLE: &str = "Hello old friend from Solana!";
pub const DEFAULT_MESSAGE: &str = "Greetings from Ethereum world.";
pub const DEFAULT_WAIT_SECS: u64 = 5;

pub const MAX_WAIT_SECS: u64 = 600;
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Debug 輸出中取代私鑰
pub(crate) fn redacted(secret: &Option<String>) -> Option<&'static str> {
    secret.as_ref().map(|_| "<redacted>")
}

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("rpc_url", config.rpc_url())?;
    validate_range("timeout_secs", config.request_timeout_secs(), 1, MAX_TIMEOUT_SECS)?;
    validate_range("wait_secs", config.settle_delay_secs(), 0, MAX_WAIT_SECS)?;
    validate_non_empty_string("sender_chain_id", config.sender_chain_id())?;
    validate_non_empty_string("category", config.category())?;
    validate_non_empty_string("title", config.title())?;
    validate_non_empty_string("message", config.message())?;

    let recipients = config.recipients();
    if recipients.is_empty() {
        return Err(crate::utils::error::PushMailError::MissingConfigError {
            field: "recipients".to_string(),
        });
    }
    for recipient in &recipients {
        validate_non_empty_string("recipients.address", &recipient.address)?;
    }

    Ok(())
}
