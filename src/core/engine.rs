use crate::core::account::create_universal_account;
use crate::domain::model::{TxPayload, TxResults, UniversalAccount};
use crate::domain::ports::{ChainClient, ClientConnector, ConfigProvider, UniversalSigner};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub recipients: Vec<UniversalAccount>,
    pub payload: TxPayload,
}

impl EmailRequest {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let recipients = config
            .recipients()
            .iter()
            .map(|r| create_universal_account(r.chain.parse()?, &r.chain_id, &r.address))
            .collect::<Result<Vec<_>>>()?;

        let mut payload = TxPayload::email(config.title(), config.message())?;
        payload.category = config.category().to_string();

        Ok(Self {
            recipients,
            payload,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EmailOutcome {
    pub tx_hash: String,
    pub results: TxResults,
}

/// Initialize, send, wait, fetch. Exactly one of each, in that order.
pub struct EmailEngine<K: ClientConnector> {
    connector: K,
    request: EmailRequest,
    settle_delay: Duration,
}

impl<K: ClientConnector> EmailEngine<K> {
    pub fn new(connector: K, request: EmailRequest, settle_delay: Duration) -> Self {
        Self {
            connector,
            request,
            settle_delay,
        }
    }

    pub async fn run(&self, signer: Arc<dyn UniversalSigner>) -> Result<EmailOutcome> {
        tracing::info!("Initializing client for {}", signer.account());
        let client = self.connector.initialize(signer).await?;
        println!("PushChain initialized");

        let handle = client
            .send(&self.request.recipients, &self.request.payload)
            .await?;
        tracing::info!(
            "Sent {} transaction to {} recipient(s)",
            self.request.payload.category,
            self.request.recipients.len()
        );
        println!("Transaction sent. TX Hash: {}", handle.tx_hash);

        // 固定等待，不做輪詢
        tracing::debug!("Waiting {:?} before fetching {}", self.settle_delay, handle.tx_hash);
        tokio::time::sleep(self.settle_delay).await;

        let results = client.get(&handle.tx_hash).await?;
        tracing::info!("Fetched {} block(s) for {}", results.blocks.len(), handle.tx_hash);
        println!("Fetched Transaction Results: {:?}", results);

        for block in &results.blocks {
            if let Some(ts) = block.timestamp() {
                tracing::debug!("Block {} at {}", block.block_hash, ts.to_rfc3339());
            }
            for tx in &block.transactions {
                println!("Transaction Data: {}", tx.data);
            }
        }

        Ok(EmailOutcome {
            tx_hash: handle.tx_hash,
            results,
        })
    }
}
