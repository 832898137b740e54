use soroban_sdk::{token, Address, Env};

use crate::delay_vault::DelayVaultClient;
use crate::storage::{write_position, ConnectorConfig};

/// Hands `amount` of settlement token to the delay vault on behalf of
/// `depositor` and records the position the vault assigned.
///
/// Not retried: a failing vault call aborts the whole deposit.
pub fn forward(e: &Env, config: &ConnectorConfig, depositor: &Address, amount: i128) -> u64 {
    let this = e.current_contract_address();
    token::Client::new(e, &config.settlement_token).approve(
        &this,
        &config.vault,
        &amount,
        &e.ledger().sequence(),
    );

    let position = DelayVaultClient::new(e, &config.vault).deposit_for(&this, depositor, &amount);
    write_position(e, depositor, position);
    position
}
