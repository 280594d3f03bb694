//! The signed envelope submitted to a Push Chain validator.
//!
//! The signature covers the JSON encoding of [`UnsignedTransaction`] with its
//! fields in declaration order. The wire form is the `0x` hex of the JSON of
//! [`SignedTransaction`].

use crate::domain::model::{TxPayload, UniversalAccount};
use crate::domain::ports::UniversalSigner;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    #[serde(rename = "type")]
    pub tx_type: u8,
    pub category: String,
    pub sender: String,
    pub recipients: Vec<String>,
    /// Hex of the payload bytes.
    pub data: String,
    pub salt: String,
    pub api_token: String,
    pub fee: String,
}

impl UnsignedTransaction {
    pub fn new(
        sender: &UniversalAccount,
        recipients: &[UniversalAccount],
        payload: &TxPayload,
        api_token: &str,
    ) -> Self {
        Self {
            tx_type: 0,
            category: payload.category.clone(),
            sender: sender.to_caip10(),
            recipients: recipients.iter().map(UniversalAccount::to_caip10).collect(),
            data: hex::encode(payload.data.as_bytes()),
            salt: Uuid::new_v4().simple().to_string(),
            api_token: api_token.to_string(),
            fee: "0".to_string(),
        }
    }

    pub fn signing_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub async fn sign(self, signer: &dyn UniversalSigner) -> Result<SignedTransaction> {
        let signature = signer.sign_message(&self.signing_bytes()?).await?;
        Ok(SignedTransaction {
            transaction: self,
            signature: format!("0x{}", hex::encode(signature)),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    #[serde(flatten)]
    pub transaction: UnsignedTransaction,
    pub signature: String,
}

impl SignedTransaction {
    pub fn to_wire_hex(&self) -> Result<String> {
        Ok(format!("0x{}", hex::encode(serde_json::to_vec(self)?)))
    }
}
