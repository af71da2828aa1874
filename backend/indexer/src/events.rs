//! Canonical event types emitted by the vault contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/deadman_vault/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the vault contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Funds entered the vault (`deposit` topic).
    Deposit,
    /// The owner proved liveness (`ping` topic).
    Ping,
    /// The beneficiary drained the vault (`claim` topic).
    Claim,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "deposit" => Self::Deposit,
            "ping" => Self::Ping,
            "claim" => Self::Claim,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Ping => "ping",
            Self::Claim => "claim",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded vault event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEvent {
    pub event_type: String,
    /// Depositing sender or claiming beneficiary; absent for pings.
    pub actor: Option<String>,
    /// Token amount moved; absent for pings.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
