use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushMailError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Key error: {message}")]
    KeyError { message: String },

    #[error("Signing error: {message}")]
    SigningError { message: String },

    #[error("Invalid {chain} address {address}: {reason}")]
    AddressError {
        chain: String,
        address: String,
        reason: String,
    },

    #[error("RPC endpoint returned HTTP {status}")]
    RpcHttpError { status: u16 },

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("Unexpected RPC response: {message}")]
    UnexpectedResponse { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Crypto,
    Network,
    Protocol,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PushMailError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::KeyError { .. } | Self::SigningError { .. } | Self::AddressError { .. } => {
                ErrorCategory::Crypto
            }
            Self::HttpError(_) | Self::RpcHttpError { .. } => ErrorCategory::Network,
            Self::RpcError { .. } | Self::UnexpectedResponse { .. } => ErrorCategory::Protocol,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重跑解決
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Crypto | ErrorCategory::Protocol => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::HttpError(_) | Self::RpcHttpError { .. } => {
                "Check that the RPC endpoint is reachable and try again"
            }
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Review the CLI flags or the TOML configuration file"
            }
            Self::KeyError { .. } => "Provide a 32-byte hex private key or omit it to generate one",
            Self::SigningError { .. } => "Regenerate the wallet key and retry",
            Self::AddressError { .. } => "Verify the recipient address matches its chain",
            Self::RpcError { .. } | Self::UnexpectedResponse { .. } => {
                "The node rejected the request; inspect the logs with --verbose"
            }
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check file permissions and available disk space"
            }
        }
    }

    /// Process exit code for this error; 0 means the run may be treated as done.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Crypto => format!("Wallet problem: {}", self),
            ErrorCategory::Network => format!("Could not reach the network: {}", self),
            ErrorCategory::Protocol => format!("The node rejected the request: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PushMailError>;
