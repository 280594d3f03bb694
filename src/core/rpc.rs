use crate::utils::error::{PushMailError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    id: Option<Value>,
    // "result": null 是合法的成功回應，只有缺少欄位才算異常
    #[serde(default, deserialize_with = "present")]
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC 2.0 over HTTP POST.
#[derive(Debug)]
pub struct RpcTransport {
    client: Client,
    endpoint: String,
    next_id: AtomicU64,
}

impl RpcTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        tracing::debug!("RPC request #{} {} -> {}", id, method, self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("RPC response #{} status: {}", id, status);
        if !status.is_success() {
            return Err(PushMailError::RpcHttpError {
                status: status.as_u16(),
            });
        }

        let body: RpcResponse = response.json().await?;

        // 部分錯誤回應的 id 為 null
        if let Some(response_id) = body.id.as_ref().filter(|v| !v.is_null()) {
            if response_id.as_u64() != Some(id) {
                return Err(PushMailError::UnexpectedResponse {
                    message: format!(
                        "{} response id {} does not match request id {}",
                        method, response_id, id
                    ),
                });
            }
        }

        match (body.result, body.error) {
            (_, Some(error)) => Err(PushMailError::RpcError {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => Ok(serde_json::from_value(result)?),
            (None, None) => Err(PushMailError::UnexpectedResponse {
                message: format!("{} returned neither result nor error", method),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TxResults;
    use httpmock::prelude::*;
    use serde_json::json;

    fn transport(server: &MockServer) -> RpcTransport {
        RpcTransport::new(server.url("/rpc"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_call_returns_result() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/rpc")
                .json_body_partial(r#"{"jsonrpc":"2.0","id":1,"method":"push_ping","params":[]}"#);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": "pong"}));
        });

        let rpc = transport(&server);
        let result: String = rpc.call("push_ping", Vec::<String>::new()).await.unwrap();

        mock.assert();
        assert_eq!(result, "pong");
    }

    #[tokio::test]
    async fn test_ids_increase_per_call() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(POST).path("/rpc").json_body_partial(r#"{"id":1}"#);
            then.status(200).json_body(json!({"jsonrpc": "2.0", "id": 1, "result": 1}));
        });
        let second = server.mock(|when, then| {
            when.method(POST).path("/rpc").json_body_partial(r#"{"id":2}"#);
            then.status(200).json_body(json!({"jsonrpc": "2.0", "id": 2, "result": 2}));
        });

        let rpc = transport(&server);
        let a: u64 = rpc.call("m", ()).await.unwrap();
        let b: u64 = rpc.call("m", ()).await.unwrap();

        first.assert();
        second.assert();
        assert_eq!((a, b), (1, 2));
    }

    #[tokio::test]
    async fn test_json_rpc_error_object() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": 1,
                "error": {"code": -32602, "message": "invalid params"}
            }));
        });

        let result: Result<String> = transport(&server).call("push_sendTransaction", ["0x"]).await;
        match result {
            Err(PushMailError::RpcError { code, message }) => {
                assert_eq!(code, -32602);
                assert_eq!(message, "invalid params");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(502);
        });

        let result: Result<String> = transport(&server).call("push_getApiToken", ()).await;
        assert!(matches!(result, Err(PushMailError::RpcHttpError { status: 502 })));
    }

    #[tokio::test]
    async fn test_null_result_is_a_valid_success() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        });

        let rpc = transport(&server);
        let result: Option<TxResults> = rpc
            .call("push_getTransactionByHash", ["0xfeed"])
            .await
            .unwrap();
        assert!(result.is_none());

        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 1, "result": null}));
        });
        let unit: Result<()> = transport(&server).call("push_ping", ()).await;
        assert!(unit.is_ok());
    }

    #[tokio::test]
    async fn test_mismatched_response_id_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200)
                .json_body(json!({"jsonrpc": "2.0", "id": 99, "result": "devnet-token"}));
        });

        let result: Result<String> = transport(&server).call("push_getApiToken", ()).await;
        match result {
            Err(PushMailError::UnexpectedResponse { message }) => {
                assert!(message.contains("response id 99"));
                assert!(message.contains("request id 1"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_null_id_on_error_reply_still_reports_rpc_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200).json_body(json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32700, "message": "parse error"}
            }));
        });

        let result: Result<String> = transport(&server).call("push_getApiToken", ()).await;
        assert!(matches!(result, Err(PushMailError::RpcError { code: -32700, .. })));
    }

    #[tokio::test]
    async fn test_missing_result_and_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/rpc");
            then.status(200).json_body(json!({"jsonrpc": "2.0", "id": 1}));
        });

        let result: Result<String> = transport(&server).call("push_getApiToken", ()).await;
        assert!(matches!(
            result,
            Err(PushMailError::UnexpectedResponse { .. })
        ));
    }
}
