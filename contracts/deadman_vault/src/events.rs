//! # Events
//!
//! The vault's append-only audit trail. Each mutating entry point emits
//! exactly one event; nothing ever rewrites or deletes one. Indexed fields
//! (the depositing sender, the claiming beneficiary) are carried as topics
//! so off-chain consumers can filter without decoding payloads.
//!
//! | Event   | Topics                      | Data             |
//! |---------|-----------------------------|------------------|
//! | deposit | `("deposit", sender)`       | [`DepositEvent`] |
//! | ping    | `("ping",)`                 | [`PingEvent`]    |
//! | claim   | `("claim", beneficiary)`    | [`ClaimEvent`]   |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

/// Funds entered the vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub sender: Address,
    pub amount: i128,
}

/// The owner proved liveness.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PingEvent {
    pub timestamp: u64,
}

/// The beneficiary drained the vault.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimEvent {
    pub beneficiary: Address,
    pub amount: i128,
}

pub fn deposit(env: &Env, sender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("deposit"), sender.clone()),
        DepositEvent {
            sender: sender.clone(),
            amount,
        },
    );
}

pub fn ping(env: &Env, timestamp: u64) {
    env.events()
        .publish((symbol_short!("ping"),), PingEvent { timestamp });
}

pub fn claim(env: &Env, beneficiary: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("claim"), beneficiary.clone()),
        ClaimEvent {
            beneficiary: beneficiary.clone(),
            amount,
        },
    );
}
