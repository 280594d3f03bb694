pub mod account;
pub mod client;
pub mod engine;
pub mod rpc;
pub mod signer;
pub mod transaction;
pub mod wallet;

pub use crate::domain::model::{TxHandle, TxPayload, TxResults, UniversalAccount};
pub use crate::domain::ports::{ChainClient, ClientConnector, ConfigProvider, UniversalSigner};
pub use crate::utils::error::Result;
