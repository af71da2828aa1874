//! # Types
//!
//! Shared data structures of the vault.
//!
//! ## Config / State split
//!
//! The vault is stored as two separate ledger entries:
//!
//! - [`VaultConfig`] — written once at construction; never mutated. The two
//!   privileged identities live here, which is what makes the roles immutable:
//!   no entry point writes this record after the constructor.
//! - [`VaultState`] — the only mutable record, rewritten on every `ping`,
//!   `deposit`, and `claim`.
//!
//! ## Status as a derived value
//!
//! [`VaultStatus`] is never stored. It is computed from `last_heartbeat`,
//! `time_limit`, and the ledger clock on every read and every claim gate, so
//! stored state cannot diverge from wall-clock truth.
//!
//! ```text
//! Alive ──(time passes, no ping)──► Expired
//! Expired ──(ping)──► Alive
//! ```
//!
//! Neither status is terminal; the machine cycles for the vault's lifetime.

use soroban_sdk::{contracttype, Address};

/// Derived liveness status.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VaultStatus {
    /// The owner pinged within the liveness window.
    Alive,
    /// The window lapsed; the beneficiary may claim.
    Expired,
}

/// Immutable vault configuration, written once at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Address permitted to ping. Fixed for the vault's lifetime.
    pub owner: Address,
    /// Address permitted to claim once expired. Fixed for the vault's lifetime.
    pub beneficiary: Address,
    /// Token the vault is denominated in.
    pub token: Address,
    /// Liveness window in seconds.
    pub time_limit: u64,
}

/// Mutable vault state.
///
/// Kept small so the frequent writes (every ping and deposit) stay cheap.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultState {
    /// Tracked balance. Mutated only by `deposit` (credit) and `claim`
    /// (drain to exactly zero); always equals the tokens actually held.
    pub balance: i128,
    /// Timestamp of the most recent heartbeat; non-decreasing.
    pub last_heartbeat: u64,
}
