use soroban_sdk::{contractclient, Address, Env};

/// Time-locked vault that tracks delayed balances per owner.
#[contractclient(name = "DelayVaultClient")]
pub trait DelayVault {
    /// Pulls `amount` from `from` (pre-approved) and credits it to `owner`.
    /// Returns the vault's global deposit counter after this deposit.
    fn deposit_for(e: Env, from: Address, owner: Address, amount: i128) -> u64;

    fn amount_deposited(e: Env, owner: Address) -> i128;

    fn counter(e: Env) -> u64;
}
