use crate::domain::model::{TxHandle, TxPayload, TxResults, UniversalAccount};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An address plus the ability to sign raw bytes, independent of the wallet behind it.
#[async_trait]
pub trait UniversalSigner: Send + Sync {
    fn account(&self) -> &UniversalAccount;
    async fn sign_message(&self, data: &[u8]) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn send(&self, recipients: &[UniversalAccount], payload: &TxPayload) -> Result<TxHandle>;
    async fn get(&self, tx_hash: &str) -> Result<TxResults>;
}

#[async_trait]
pub trait ClientConnector: Send + Sync {
    type Client: ChainClient;

    async fn initialize(&self, signer: Arc<dyn UniversalSigner>) -> Result<Self::Client>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientConfig {
    pub chain: String,
    pub chain_id: String,
    pub address: String,
}

pub trait ConfigProvider: Send + Sync {
    fn rpc_url(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn private_key(&self) -> Option<&str>;
    fn sender_chain(&self) -> &str;
    fn sender_chain_id(&self) -> &str;
    fn recipients(&self) -> Vec<RecipientConfig>;
    fn category(&self) -> &str;
    fn title(&self) -> &str;
    fn message(&self) -> &str;
    fn settle_delay_secs(&self) -> u64;
}
