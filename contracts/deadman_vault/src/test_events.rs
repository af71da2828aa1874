extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token::StellarAssetClient,
    vec, Address, Env, IntoVal, TryIntoVal, Val, Vec,
};

use crate::events::{ClaimEvent, DepositEvent, PingEvent};
use crate::{DeadmanVault, DeadmanVaultClient, TIME_LIMIT};

const T0: u64 = 1_700_000_000;

fn setup() -> (
    Env,
    DeadmanVaultClient<'static>,
    Address,
    Address,
    StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(T0);

    let owner = Address::generate(&env);
    let beneficiary = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let sac = StellarAssetClient::new(&env, &token_address);

    let contract_id = env.register(DeadmanVault, (&owner, &beneficiary, &token_address));
    let client = DeadmanVaultClient::new(&env, &contract_id);

    (env, client, owner, beneficiary, sac)
}

/// Events published by the vault itself. The token contract publishes its
/// own transfer events in the same invocations, so filtering by emitter is
/// required before looking at the last entry.
fn vault_events(env: &Env, contract: &Address) -> std::vec::Vec<(Address, Vec<Val>, Val)> {
    env.events()
        .all()
        .iter()
        .filter(|e| &e.0 == contract)
        .collect()
}

#[test]
fn test_deposit_event() {
    let (env, client, owner, _, sac) = setup();

    let amount = 7_500i128;
    sac.mint(&owner, &amount);
    client.deposit(&owner, &amount);

    let events = vault_events(&env, &client.address);
    let last_event = events.last().expect("No events found");

    // Topic: (symbol_short!("deposit"), sender)
    let expected_topics = vec![
        &env,
        symbol_short!("deposit").into_val(&env),
        owner.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: DepositEvent struct
    let event_data: DepositEvent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        DepositEvent {
            sender: owner.clone(),
            amount,
        }
    );
}

#[test]
fn test_ping_event() {
    let (env, client, owner, _, _) = setup();

    env.ledger().set_timestamp(T0 + 42);
    client.ping(&owner);

    let events = vault_events(&env, &client.address);
    let last_event = events.last().expect("No events found");

    // Topic: (symbol_short!("ping"),)
    let expected_topics = vec![&env, symbol_short!("ping").into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    // Data: PingEvent struct carrying the new heartbeat timestamp
    let event_data: PingEvent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, PingEvent { timestamp: T0 + 42 });
}

#[test]
fn test_claim_event() {
    let (env, client, owner, beneficiary, sac) = setup();

    let amount = 3_000i128;
    sac.mint(&owner, &amount);
    client.deposit(&owner, &amount);

    env.ledger().set_timestamp(T0 + TIME_LIMIT + 1);
    client.claim(&beneficiary);

    let events = vault_events(&env, &client.address);
    let last_event = events.last().expect("No events found");

    // Topic: (symbol_short!("claim"), beneficiary)
    let expected_topics = vec![
        &env,
        symbol_short!("claim").into_val(&env),
        beneficiary.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    // Data: ClaimEvent struct recording the drained amount
    let event_data: ClaimEvent = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ClaimEvent {
            beneficiary: beneficiary.clone(),
            amount,
        }
    );
}

#[test]
fn test_failed_operations_emit_nothing() {
    let (env, client, _, beneficiary, _) = setup();

    // Claim before expiry fails; the failed invocation must leave no trace
    // in the audit trail
    let before = vault_events(&env, &client.address).len();
    let _ = client.try_claim(&beneficiary);
    let after = vault_events(&env, &client.address).len();

    assert_eq!(before, after);
}
