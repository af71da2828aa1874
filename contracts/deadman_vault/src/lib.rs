//! # Dead-Man's Switch Custody Vault
//!
//! A single-owner vault with a liveness deadline. The owner deposits funds
//! and must `ping` within [`TIME_LIMIT`] seconds of the previous heartbeat;
//! once the window lapses, the designated beneficiary may `claim` the entire
//! balance.
//!
//! | Phase       | Entry Point(s)                                          |
//! |-------------|---------------------------------------------------------|
//! | Bootstrap   | [`DeadmanVault::__constructor`]                         |
//! | Liveness    | [`DeadmanVault::ping`]                                  |
//! | Funding     | [`DeadmanVault::deposit`]                               |
//! | Payout      | [`DeadmanVault::claim`]                                 |
//! | Queries     | `owner`, `beneficiary`, `token`, `time_limit`, `last_heartbeat`, `balance`, `status` |
//!
//! ## Architecture
//!
//! Storage access is fully delegated to [`storage`], event emission to
//! [`events`]. This file holds the entry points and the authorization and
//! expiry gates — liveness status is always derived from the stored heartbeat
//! and the clock, never stored as a flag that could fall out of sync.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, panic_with_error, token, Address, Env};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use storage::{load_config, load_state, save_config, save_state};
pub use types::{VaultConfig, VaultState, VaultStatus};

/// Liveness window in seconds (30 days). Fixed at build time; the deployed
/// vault exposes it through the `time_limit` view.
pub const TIME_LIMIT: u64 = 30 * 24 * 60 * 60;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized        = 1,
    NotYetExpired       = 2,
    NoFunds             = 3,
    InvalidAmount       = 4,
    InvalidConstruction = 5,
}

#[contract]
pub struct DeadmanVault;

#[contractimpl]
impl DeadmanVault {
    // ─────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────

    /// Instantiate the vault.
    ///
    /// - `owner` must sign; there is no ambient deployer identity in a
    ///   Soroban constructor, so the owner is passed explicitly.
    /// - `beneficiary` is the only address that may ever claim.
    /// - `token` is the asset the vault is denominated in.
    ///
    /// Rejects `owner == beneficiary` with [`Error::InvalidConstruction`].
    /// The heartbeat clock starts at the creation timestamp, so a fresh
    /// vault is always `Alive`.
    pub fn __constructor(env: Env, owner: Address, beneficiary: Address, token: Address) {
        owner.require_auth();

        if owner == beneficiary {
            panic_with_error!(&env, Error::InvalidConstruction);
        }

        let config = VaultConfig {
            owner,
            beneficiary,
            token,
            time_limit: TIME_LIMIT,
        };
        let state = VaultState {
            balance: 0,
            last_heartbeat: env.ledger().timestamp(),
        };

        save_config(&env, &config);
        save_state(&env, &state);
    }

    // ─────────────────────────────────────────────────────────
    // Liveness
    // ─────────────────────────────────────────────────────────

    /// Prove liveness and restart the expiry window.
    ///
    /// Owner-only. Sets `last_heartbeat` to the current ledger timestamp and
    /// emits `ping`. Callable in any status — a ping after expiry returns the
    /// vault to `Alive` as long as no claim has drained it first.
    pub fn ping(env: Env, caller: Address) {
        caller.require_auth();

        let config = load_config(&env);
        if caller != config.owner {
            panic_with_error!(&env, Error::Unauthorized);
        }

        let mut state = load_state(&env);
        let timestamp = env.ledger().timestamp();
        // Ledger timestamps never go backwards, so last_heartbeat is
        // non-decreasing over the vault's lifetime.
        state.last_heartbeat = timestamp;
        save_state(&env, &state);

        events::ping(&env, timestamp);
    }

    // ─────────────────────────────────────────────────────────
    // Funding
    // ─────────────────────────────────────────────────────────

    /// Deposit `amount` of the vault token.
    ///
    /// Open to any caller — topping up the vault requires no role, only the
    /// sender's own transfer authorization. Rejects non-positive amounts with
    /// [`Error::InvalidAmount`]. The tracked balance is credited by exactly
    /// the transferred amount.
    pub fn deposit(env: Env, sender: Address, amount: i128) {
        sender.require_auth();

        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let config = load_config(&env);
        let mut state = load_state(&env);

        // Pull tokens in first; the transfer aborts the whole invocation if
        // the sender cannot cover it, leaving the ledger untouched.
        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&sender, &env.current_contract_address(), &amount);

        state.balance += amount;
        save_state(&env, &state);

        events::deposit(&env, &sender, amount);
    }

    // ─────────────────────────────────────────────────────────
    // Payout
    // ─────────────────────────────────────────────────────────

    /// Claim the entire balance after the owner's liveness window lapsed.
    ///
    /// Beneficiary-only ([`Error::Unauthorized`]), requires derived status
    /// `Expired` ([`Error::NotYetExpired`]) and a non-empty vault
    /// ([`Error::NoFunds`]).
    ///
    /// The balance is zeroed in storage and the `claim` event emitted
    /// *before* the outbound transfer: a reentrant call arriving during the
    /// transfer observes an empty vault and fails with `NoFunds`.
    pub fn claim(env: Env, caller: Address) {
        caller.require_auth();

        let config = load_config(&env);
        if caller != config.beneficiary {
            panic_with_error!(&env, Error::Unauthorized);
        }

        let mut state = load_state(&env);
        let now = env.ledger().timestamp();
        if derive_status(now, state.last_heartbeat, config.time_limit) != VaultStatus::Expired {
            panic_with_error!(&env, Error::NotYetExpired);
        }
        if state.balance == 0 {
            panic_with_error!(&env, Error::NoFunds);
        }

        let amount = state.balance;
        state.balance = 0;
        save_state(&env, &state);

        events::claim(&env, &config.beneficiary, amount);

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &config.beneficiary, &amount);
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// The address permitted to ping.
    pub fn owner(env: Env) -> Address {
        load_config(&env).owner
    }

    /// The address permitted to claim once expired.
    pub fn beneficiary(env: Env) -> Address {
        load_config(&env).beneficiary
    }

    /// The token the vault is denominated in.
    pub fn token(env: Env) -> Address {
        load_config(&env).token
    }

    /// The liveness window in seconds.
    pub fn time_limit(env: Env) -> u64 {
        load_config(&env).time_limit
    }

    /// Timestamp of the owner's most recent heartbeat (or creation).
    pub fn last_heartbeat(env: Env) -> u64 {
        load_state(&env).last_heartbeat
    }

    /// Currently held balance.
    pub fn balance(env: Env) -> i128 {
        load_state(&env).balance
    }

    /// Derived liveness status at the current ledger timestamp.
    pub fn status(env: Env) -> VaultStatus {
        let config = load_config(&env);
        let state = load_state(&env);
        derive_status(env.ledger().timestamp(), state.last_heartbeat, config.time_limit)
    }
}

/// `Alive` while `now - last_heartbeat <= time_limit`; the boundary itself
/// is `Alive`, one second past it is `Expired`.
fn derive_status(now: u64, last_heartbeat: u64, time_limit: u64) -> VaultStatus {
    if now.saturating_sub(last_heartbeat) <= time_limit {
        VaultStatus::Alive
    } else {
        VaultStatus::Expired
    }
}
