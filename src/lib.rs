pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::toml_config::TomlConfig;

pub use core::client::{PushChain, PushChainConnector};
pub use core::engine::{EmailEngine, EmailOutcome, EmailRequest};
pub use core::signer::WalletSigner;
pub use core::wallet::Wallet;
pub use domain::chain::{chain_id, Chain};
pub use utils::error::{PushMailError, Result};
