use crate::core::rpc::RpcTransport;
use crate::core::transaction::UnsignedTransaction;
use crate::domain::model::{TxHandle, TxPayload, TxResults, UniversalAccount};
use crate::domain::ports::{ChainClient, ClientConnector, UniversalSigner};
use crate::utils::error::{PushMailError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

pub const METHOD_GET_API_TOKEN: &str = "push_getApiToken";
pub const METHOD_SEND_TRANSACTION: &str = "push_sendTransaction";
pub const METHOD_GET_TRANSACTION_BY_HASH: &str = "push_getTransactionByHash";

#[derive(Debug, Clone)]
pub struct PushChainConnector {
    rpc_url: String,
    timeout: Duration,
}

impl PushChainConnector {
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ClientConnector for PushChainConnector {
    type Client = PushChain;

    async fn initialize(&self, signer: Arc<dyn UniversalSigner>) -> Result<PushChain> {
        PushChain::initialize(signer, &self.rpc_url, self.timeout).await
    }
}

/// Client bound to one signer and one validator endpoint.
pub struct PushChain {
    transport: RpcTransport,
    signer: Arc<dyn UniversalSigner>,
    api_token: String,
}

impl PushChain {
    pub async fn initialize(
        signer: Arc<dyn UniversalSigner>,
        rpc_url: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let transport = RpcTransport::new(rpc_url, timeout)?;
        let api_token: String = transport.call(METHOD_GET_API_TOKEN, json!([])).await?;
        tracing::debug!(
            "Obtained API token from {} for {}",
            transport.endpoint(),
            signer.account()
        );

        Ok(Self {
            transport,
            signer,
            api_token,
        })
    }

    pub fn signer(&self) -> &dyn UniversalSigner {
        self.signer.as_ref()
    }
}

#[async_trait]
impl ChainClient for PushChain {
    async fn send(&self, recipients: &[UniversalAccount], payload: &TxPayload) -> Result<TxHandle> {
        if recipients.is_empty() {
            return Err(PushMailError::ConfigValidationError {
                field: "recipients".to_string(),
                message: "at least one recipient is required".to_string(),
            });
        }

        let signer = self.signer();
        let unsigned =
            UnsignedTransaction::new(signer.account(), recipients, payload, &self.api_token);
        let signed = unsigned.sign(signer).await?;
        tracing::debug!(
            "Submitting {} transaction with salt {} to {} recipient(s)",
            signed.transaction.category,
            signed.transaction.salt,
            recipients.len()
        );

        let tx_hash: String = self
            .transport
            .call(METHOD_SEND_TRANSACTION, json!([signed.to_wire_hex()?]))
            .await?;

        Ok(TxHandle { tx_hash })
    }

    async fn get(&self, tx_hash: &str) -> Result<TxResults> {
        // 尚未被索引的交易回傳 null
        let results: Option<TxResults> = self
            .transport
            .call(METHOD_GET_TRANSACTION_BY_HASH, json!([tx_hash]))
            .await?;
        if results.is_none() {
            tracing::debug!("{} is not indexed yet", tx_hash);
        }
        Ok(results.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::account::create_universal_account;
    use crate::core::signer::WalletSigner;
    use crate::core::wallet::Wallet;
    use crate::domain::chain::{chain_id, Chain};
    use httpmock::prelude::*;

    fn signer() -> Arc<dyn UniversalSigner> {
        Arc::new(
            WalletSigner::new(
                Wallet::generate().unwrap(),
                Chain::Ethereum,
                chain_id::ethereum::DEVNET,
            )
            .unwrap(),
        )
    }

    fn mock_token(server: &MockServer) -> httpmock::Mock<'_> {
        server.mock(|when, then| {
            when.method(POST)
                .path("/rpc")
                .json_body_partial(r#"{"method":"push_getApiToken"}"#);
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "api-token-xyz"}));
        })
    }

    #[tokio::test]
    async fn test_initialize_fetches_api_token() {
        let server = MockServer::start();
        let token = mock_token(&server);

        let connector = PushChainConnector::new(server.url("/rpc"), Duration::from_secs(5));
        let client = connector.initialize(signer()).await.unwrap();

        token.assert();
        assert_eq!(client.api_token, "api-token-xyz");
        assert_eq!(client.signer().account().chain, Chain::Ethereum);
    }

    #[tokio::test]
    async fn test_send_rejects_empty_recipients() {
        let server = MockServer::start();
        mock_token(&server);

        let client = PushChain::initialize(signer(), &server.url("/rpc"), Duration::from_secs(5))
            .await
            .unwrap();
        let payload = TxPayload::email("t", "m").unwrap();

        let result = client.send(&[], &payload).await;
        assert!(matches!(
            result,
            Err(PushMailError::ConfigValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn test_send_submits_signed_envelope() {
        let server = MockServer::start();
        mock_token(&server);
        let send = server.mock(|when, then| {
            when.method(POST)
                .path("/rpc")
                .json_body_partial(r#"{"method":"push_sendTransaction"}"#);
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 2, "result": "0xfeed"}));
        });

        let client = PushChain::initialize(signer(), &server.url("/rpc"), Duration::from_secs(5))
            .await
            .unwrap();
        let recipient = create_universal_account(
            Chain::Solana,
            chain_id::solana::DEVNET,
            "ySYrGNLLJSK9hvGGpoxg8TzWfRe8ftBtDSMECtx2eJR",
        )
        .unwrap();
        let payload = TxPayload::email("t", "m").unwrap();

        let handle = client.send(&[recipient], &payload).await.unwrap();

        send.assert();
        assert_eq!(handle.tx_hash, "0xfeed");
    }

    #[tokio::test]
    async fn test_get_decodes_blocks() {
        let server = MockServer::start();
        mock_token(&server);
        let get = server.mock(|when, then| {
            when.method(POST).path("/rpc").json_body_partial(
                r#"{"method":"push_getTransactionByHash","params":["0xfeed"]}"#,
            );
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 2,
                "result": {
                    "blocks": [{
                        "blockHash": "0xb1",
                        "ts": 1700000000000i64,
                        "transactions": [{"txnHash": "0xfeed", "category": "EMAIL", "data": "7b7d"}]
                    }],
                    "lastTs": 1700000000000i64,
                    "totalPages": 1
                }
            }));
        });

        let client = PushChain::initialize(signer(), &server.url("/rpc"), Duration::from_secs(5))
            .await
            .unwrap();
        let results = client.get("0xfeed").await.unwrap();

        get.assert();
        assert_eq!(results.blocks.len(), 1);
        assert_eq!(results.blocks[0].transactions[0].category, "EMAIL");
        assert_eq!(results.transaction_data().collect::<Vec<_>>(), vec!["7b7d"]);
        assert_eq!(results.total_pages, Some(1));
    }

    #[tokio::test]
    async fn test_get_unindexed_transaction_yields_no_blocks() {
        let server = MockServer::start();
        mock_token(&server);
        let get = server.mock(|when, then| {
            when.method(POST)
                .path("/rpc")
                .json_body_partial(r#"{"method":"push_getTransactionByHash"}"#);
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 2, "result": null}));
        });

        let client = PushChain::initialize(signer(), &server.url("/rpc"), Duration::from_secs(5))
            .await
            .unwrap();
        let results = client.get("0xfeed").await.unwrap();

        get.assert();
        assert!(results.blocks.is_empty());
        assert_eq!(results.transaction_data().count(), 0);
    }
}
