use crate::config::*;
use crate::domain::ports::{ConfigProvider, RecipientConfig};
use crate::utils::error::{PushMailError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub sender: SenderConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default = "default_recipients")]
    pub recipients: Vec<RecipientConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_seconds: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_rpc_url(),
            timeout_seconds: default_timeout_secs(),
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    pub private_key: Option<String>,
}

impl fmt::Debug for WalletConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletConfig")
            .field("private_key", &redacted(&self.private_key))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    #[serde(default = "default_sender_chain")]
    pub chain: String,
    #[serde(default = "default_sender_chain_id")]
    pub chain_id: String,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            chain: default_sender_chain(),
            chain_id: default_sender_chain_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_message")]
    pub message: String,
    #[serde(default = "default_wait_secs")]
    pub wait_seconds: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            title: default_title(),
            message: default_message(),
            wait_seconds: default_wait_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn default_rpc_url() -> String {
    DEFAULT_RPC_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_sender_chain() -> String {
    DEFAULT_SENDER_CHAIN.to_string()
}
fn default_sender_chain_id() -> String {
    DEFAULT_SENDER_CHAIN_ID.to_string()
}
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}
fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}
fn default_wait_secs() -> u64 {
    DEFAULT_WAIT_SECS
}
fn default_recipients() -> Vec<RecipientConfig> {
    vec![RecipientConfig {
        chain: DEFAULT_RECIPIENT_CHAIN.to_string(),
        chain_id: DEFAULT_RECIPIENT_CHAIN_ID.to_string(),
        address: DEFAULT_RECIPIENT_ADDRESS.to_string(),
    }]
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PushMailError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PushMailError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PUSH_PRIVATE_KEY})
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("static pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn rpc_url(&self) -> &str {
        &self.network.rpc_url
    }

    fn request_timeout_secs(&self) -> u64 {
        self.network.timeout_seconds
    }

    fn private_key(&self) -> Option<&str> {
        // 未替換的 ${VAR} 視為未設定
        self.wallet
            .private_key
            .as_deref()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
    }

    fn sender_chain(&self) -> &str {
        &self.sender.chain
    }

    fn sender_chain_id(&self) -> &str {
        &self.sender.chain_id
    }

    fn recipients(&self) -> Vec<RecipientConfig> {
        self.recipients.clone()
    }

    fn category(&self) -> &str {
        &self.email.category
    }

    fn title(&self) -> &str {
        &self.email.title
    }

    fn message(&self) -> &str {
        &self.email.message
    }

    fn settle_delay_secs(&self) -> u64 {
        self.email.wait_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
