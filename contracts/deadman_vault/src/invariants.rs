#![allow(dead_code)]

extern crate std;

use crate::types::{VaultConfig, VaultState};

/// INV-1: The tracked balance must never be negative.
pub fn assert_balance_non_negative(state: &VaultState) {
    assert!(
        state.balance >= 0,
        "INV-1 violated: negative balance ({})",
        state.balance
    );
}

/// INV-2: `last_heartbeat` must never decrease.
pub fn assert_heartbeat_monotonic(before: u64, after: u64) {
    assert!(
        after >= before,
        "INV-2 violated: last_heartbeat decreased from {} to {}",
        before,
        after
    );
}

/// INV-3: Configuration immutability — roles, token, and time limit never
/// change after construction.
pub fn assert_config_immutable(original: &VaultConfig, current: &VaultConfig) {
    assert_eq!(
        original.owner, current.owner,
        "INV-3 violated: owner changed"
    );
    assert_eq!(
        original.beneficiary, current.beneficiary,
        "INV-3 violated: beneficiary changed"
    );
    assert_eq!(
        original.token, current.token,
        "INV-3 violated: token changed"
    );
    assert_eq!(
        original.time_limit, current.time_limit,
        "INV-3 violated: time_limit changed"
    );
}

/// INV-4: Deposit invariant — after a deposit of `amount`, the balance
/// increases by exactly `amount`.
pub fn assert_deposit_invariant(balance_before: i128, balance_after: i128, amount: i128) {
    assert_eq!(
        balance_after,
        balance_before + amount,
        "INV-4 violated: deposit invariant broken: {} + {} != {}",
        balance_before,
        amount,
        balance_after
    );
}

/// INV-5: A successful claim drains the balance to exactly zero.
pub fn assert_claim_drains(state: &VaultState) {
    assert_eq!(
        state.balance, 0,
        "INV-5 violated: balance after claim is {} instead of 0",
        state.balance
    );
}

/// INV-6: The tracked balance must equal the tokens the contract actually
/// holds — the ledger record may never drift from reality.
pub fn assert_ledger_matches_holdings(tracked: i128, held: i128) {
    assert_eq!(
        tracked, held,
        "INV-6 violated: tracked balance {} != held tokens {}",
        tracked, held
    );
}
