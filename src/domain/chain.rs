//! Chain tags and the chain-id registry used when building universal accounts.

use crate::utils::error::PushMailError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Chain {
    Push,
    Ethereum,
    Solana,
}

impl Chain {
    /// CAIP-2 namespace for this chain family.
    pub fn namespace(&self) -> &'static str {
        match self {
            Chain::Push => "push",
            Chain::Ethereum => "eip155",
            Chain::Solana => "solana",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Chain::Push => "PUSH",
            Chain::Ethereum => "ETHEREUM",
            Chain::Solana => "SOLANA",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = PushMailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PUSH" => Ok(Chain::Push),
            "ETHEREUM" => Ok(Chain::Ethereum),
            "SOLANA" => Ok(Chain::Solana),
            other => Err(PushMailError::InvalidConfigValueError {
                field: "chain".to_string(),
                value: other.to_string(),
                reason: "Supported chains: PUSH, ETHEREUM, SOLANA".to_string(),
            }),
        }
    }
}

pub mod chain_id {
    pub mod push {
        pub const MAINNET: &str = "9";
        pub const DEVNET: &str = "9000";
        pub const LOCALNET: &str = "9001";
    }

    pub mod ethereum {
        pub const MAINNET: &str = "1";
        /// Sepolia
        pub const DEVNET: &str = "11155111";
        pub const LOCALNET: &str = "1337";
    }

    pub mod solana {
        pub const MAINNET: &str = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
        pub const DEVNET: &str = "EtWTRABZaYq6iMfeYKouRu166VU2xqa1";
        pub const TESTNET: &str = "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3z";
    }
}
