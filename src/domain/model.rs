use crate::domain::chain::Chain;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const EMAIL_CATEGORY: &str = "EMAIL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalAccount {
    pub chain: Chain,
    pub chain_id: String,
    pub address: String,
}

impl UniversalAccount {
    /// `namespace:chain_id:address`
    pub fn to_caip10(&self) -> String {
        format!(
            "{}:{}:{}",
            self.chain.namespace(),
            self.chain_id,
            self.address
        )
    }
}

impl fmt::Display for UniversalAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_caip10())
    }
}

#[derive(Debug, Serialize)]
struct EmailBody<'a> {
    title: &'a str,
    message: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPayload {
    pub category: String,
    pub data: String,
}

impl TxPayload {
    pub fn email(title: &str, message: &str) -> serde_json::Result<Self> {
        Ok(Self {
            category: EMAIL_CATEGORY.to_string(),
            data: serde_json::to_string(&EmailBody { title, message })?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxHandle {
    pub tx_hash: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxResults {
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub last_ts: Option<i64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

impl TxResults {
    /// Data payloads of every transaction, block by block.
    pub fn transaction_data(&self) -> impl Iterator<Item = &str> {
        self.blocks
            .iter()
            .flat_map(|block| block.transactions.iter())
            .map(|tx| tx.data.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default)]
    pub block_hash: String,
    /// Milliseconds since the epoch.
    #[serde(default)]
    pub ts: Option<i64>,
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
}

impl Block {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.ts
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTransaction {
    #[serde(default)]
    pub txn_hash: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipients: Vec<String>,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_payload_field_order() {
        let payload = TxPayload::email("Hi", "There").unwrap();
        assert_eq!(payload.category, "EMAIL");
        assert_eq!(payload.data, r#"{"title":"Hi","message":"There"}"#);
    }

    #[test]
    fn test_caip10_formatting() {
        let account = UniversalAccount {
            chain: Chain::Solana,
            chain_id: "EtWTRABZaYq6iMfeYKouRu166VU2xqa1".to_string(),
            address: "ySYrGNLLJSK9hvGGpoxg8TzWfRe8ftBtDSMECtx2eJR".to_string(),
        };
        assert_eq!(
            account.to_caip10(),
            "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1:ySYrGNLLJSK9hvGGpoxg8TzWfRe8ftBtDSMECtx2eJR"
        );
        assert_eq!(account.to_string(), account.to_caip10());
    }

    #[test]
    fn test_results_tolerate_missing_fields() {
        let json = serde_json::json!({
            "blocks": [
                {"blockHash": "b1", "ts": 1700000000000i64, "transactions": [{"data": "aa"}, {"data": "bb"}]},
                {"transactions": [{"txnHash": "t3", "data": "cc"}]}
            ]
        });
        let results: TxResults = serde_json::from_value(json).unwrap();

        let data: Vec<&str> = results.transaction_data().collect();
        assert_eq!(data, vec!["aa", "bb", "cc"]);
        assert!(results.blocks[0].timestamp().is_some());
        assert!(results.blocks[1].timestamp().is_none());
        assert_eq!(results.total_pages, None);
    }

    #[test]
    fn test_empty_results() {
        let results: TxResults = serde_json::from_str("{}").unwrap();
        assert_eq!(results.transaction_data().count(), 0);
    }
}
