//! # Storage
//!
//! Typed helpers over the vault's instance storage.
//!
//! | Key      | Type          | Description                                |
//! |----------|---------------|--------------------------------------------|
//! | `Config` | `VaultConfig` | Immutable roles, token, and time limit     |
//! | `State`  | `VaultState`  | Mutable balance and heartbeat              |
//!
//! The vault is a singleton per deployment, so both entries live in instance
//! storage and share the contract's lifetime. Instance TTL is bumped by
//! **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Env};

use crate::types::{VaultConfig, VaultState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 30 days when below 7 days remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Immutable vault configuration (Instance).
    Config,
    /// Mutable vault state (Instance).
    State,
}

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Config ───────────────────────────────────────────────────────────

/// Store the vault configuration. Called exactly once, from the constructor.
pub fn save_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Load the vault configuration.
/// Panics if the vault has not been constructed.
pub fn load_config(env: &Env) -> VaultConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("vault not initialized")
}

// ── State ────────────────────────────────────────────────────────────

/// Save the mutable vault state.
pub fn save_state(env: &Env, state: &VaultState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

/// Load the mutable vault state.
/// Panics if the vault has not been constructed.
pub fn load_state(env: &Env) -> VaultState {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .expect("vault not initialized")
}
