use soroban_sdk::{testutils::Events as _, BytesN, FromVal, IntoVal, Symbol, Val, Vec};

use super::{ConnectorTest, UNIT};

/// Topics and data of the last event the connector published.
fn last_connector_event(t: &ConnectorTest) -> (Vec<Val>, Val) {
    let (_, topics, data) = t
        .env
        .events()
        .all()
        .iter()
        .filter(|(contract, _, _)| *contract == t.connector.address)
        .last()
        .expect("connector published no event");
    (topics, data)
}

#[test]
fn test_set_fee_publishes_new_fee() {
    let t = ConnectorTest::setup(0);
    t.connector.set_fee(&t.owner, &250);

    let (topics, data) = last_connector_event(&t);
    let expected: Vec<Val> = (Symbol::new(&t.env, "fee_changed"),).into_val(&t.env);
    assert_eq!(topics, expected);
    assert_eq!(u32::from_val(&t.env, &data), 250);
}

#[test]
fn test_withdraw_fee_publishes_owner_and_amount() {
    let t = ConnectorTest::setup(1_000);
    t.approve(&t.user, &t.settlement, 100 * UNIT);
    t.connector
        .create_deposit(&t.user, &(100 * UNIT), &0, &t.no_route());
    t.connector.withdraw_fee(&t.owner);

    let (topics, data) = last_connector_event(&t);
    let expected: Vec<Val> =
        (Symbol::new(&t.env, "fee_withdrawn"), t.owner.clone()).into_val(&t.env);
    assert_eq!(topics, expected);
    assert_eq!(i128::from_val(&t.env, &data), 10 * UNIT);
}

#[test]
fn test_direct_deposit_publishes_fingerprint_of_path() {
    let t = ConnectorTest::setup(1_000);
    t.approve(&t.user, &t.settlement, 100);
    t.connector.create_deposit(&t.user, &100, &0, &t.no_route());

    let (topics, data) = last_connector_event(&t);
    let expected: Vec<Val> =
        (Symbol::new(&t.env, "deposit_created"), t.user.clone()).into_val(&t.env);
    assert_eq!(topics, expected);

    let (amount_in, fingerprint, net_amount) =
        <(i128, BytesN<32>, i128)>::from_val(&t.env, &data);
    assert_eq!(amount_in, 100);
    assert_eq!(fingerprint, t.connector.path_fingerprint(&t.no_route()));
    assert_eq!(net_amount, 90);
}

#[test]
fn test_routed_deposit_publishes_fingerprint_of_route() {
    let t = ConnectorTest::setup(0);
    let amount = 10 * UNIT;
    t.approve(&t.user, &t.base, amount);
    t.connector
        .create_deposit(&t.user, &amount, &(amount * 2), &t.route());

    let (_, data) = last_connector_event(&t);
    let (amount_in, fingerprint, net_amount) =
        <(i128, BytesN<32>, i128)>::from_val(&t.env, &data);
    assert_eq!(amount_in, amount);
    assert_eq!(fingerprint, t.connector.path_fingerprint(&t.route()));
    assert_ne!(fingerprint, t.connector.path_fingerprint(&t.no_route()));
    assert_eq!(net_amount, amount * 2);
}

#[test]
fn test_failed_deposit_publishes_nothing() {
    let t = ConnectorTest::setup(0);
    t.approve(&t.user, &t.base, 10 * UNIT);
    assert!(t
        .connector
        .try_create_deposit(&t.user, &(10 * UNIT), &(100 * UNIT), &t.route())
        .is_err());

    let published = t
        .env
        .events()
        .all()
        .iter()
        .filter(|(contract, _, _)| *contract == t.connector.address)
        .count();
    assert_eq!(published, 0);
}
