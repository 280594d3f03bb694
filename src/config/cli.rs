use crate::config::*;
use crate::domain::ports::{ConfigProvider, RecipientConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "push-mail")]
#[command(about = "Send a cross-chain email notification over Push Chain and read it back")]
pub struct CliConfig {
    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    #[arg(long, help = "Hex private key; a new one is generated when omitted")]
    pub private_key: Option<String>,

    #[arg(long, default_value = DEFAULT_SENDER_CHAIN)]
    pub sender_chain: String,

    #[arg(long, default_value = DEFAULT_SENDER_CHAIN_ID)]
    pub sender_chain_id: String,

    #[arg(long, default_value = DEFAULT_RECIPIENT_CHAIN)]
    pub recipient_chain: String,

    #[arg(long, default_value = DEFAULT_RECIPIENT_CHAIN_ID)]
    pub recipient_chain_id: String,

    #[arg(long, default_value = DEFAULT_RECIPIENT_ADDRESS)]
    pub recipient_address: String,

    #[arg(long, default_value = DEFAULT_CATEGORY)]
    pub category: String,

    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    #[arg(long, default_value_t = DEFAULT_WAIT_SECS, help = "Seconds to wait between send and fetch")]
    pub wait_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

// 私鑰不可出現在日誌中
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CliConfig")
            .field("config", &self.config)
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("private_key", &redacted(&self.private_key))
            .field("sender_chain", &self.sender_chain)
            .field("sender_chain_id", &self.sender_chain_id)
            .field("recipient_chain", &self.recipient_chain)
            .field("recipient_chain_id", &self.recipient_chain_id)
            .field("recipient_address", &self.recipient_address)
            .field("category", &self.category)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("wait_secs", &self.wait_secs)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl ConfigProvider for CliConfig {
    fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    fn sender_chain(&self) -> &str {
        &self.sender_chain
    }

    fn sender_chain_id(&self) -> &str {
        &self.sender_chain_id
    }

    fn recipients(&self) -> Vec<RecipientConfig> {
        vec![RecipientConfig {
            chain: self.recipient_chain.clone(),
            chain_id: self.recipient_chain_id.clone(),
            address: self.recipient_address.clone(),
        }]
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn settle_delay_secs(&self) -> u64 {
        self.wait_secs
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
