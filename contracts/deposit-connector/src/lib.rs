#![no_std]
//! # Deposit Connector - Swap, Fee and Delay-Vault Zapper
//!
//! Takes a depositor's tokens, optionally routes them through a multi-hop
//! exchange into the settlement token, keeps a protocol fee and forwards the
//! rest into a time-locked delay vault. Every accepted deposit bumps the vault's
//! global counter, and the connector remembers that position per depositor.
//!
//! ## Tier Gate:
//! Deposit sizes fall into geometric tiers. A depositor may climb at most one
//! tier above their largest previous deposit per call, so nobody jumps straight
//! from a tiny deposit to a huge one.
//!
//! ## Token Flow:
//! ```text
//! Depositor (base) → Connector → Router → Connector (settlement) → Delay Vault
//!                                               ↘ fee stays in the connector
//! ```
//! With an empty route the depositor pays in the settlement token directly.
//!
//! Every step is a hard gate: a failing step fails the invocation and nothing
//! it did is kept.

use soroban_sdk::{
    contract, contractimpl, contracttype, log, panic_with_error, token, Address, BytesN, Env,
    String, Vec,
};

mod access;
mod bridge;
mod constants;
mod delay_vault;
mod error;
mod events;
mod fee;
mod router;
mod storage;
mod swap;
mod tier;

pub use delay_vault::{DelayVault, DelayVaultClient};
pub use error::ConnectorError;
pub use router::{ExchangeRouter, ExchangeRouterClient, SwapHop};
pub use storage::{ConfigV1, ConnectorConfig, StoredConfig};

use access::{require_not_paused, require_owner};
use constants::{CONTRACT_NAME, CONTRACT_VERSION, MAX_FEE_BPS, STATE_VERSION};
use storage::{
    extend_instance_ttl, read_accrued_fee, read_config, read_fee_bps, read_owner,
    read_position, read_state_version, read_stored_config, read_tier_record, write_config,
    write_fee_bps, write_owner, write_state_version,
};
use tier::TierBuckets;

/// Outcome of an accepted deposit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositReceipt {
    /// Settlement amount after the swap, before the fee
    pub swapped_amount: i128,
    pub fee: i128,
    /// Amount delivered to the delay vault
    pub net_amount: i128,
    /// Vault counter after this deposit
    pub position: u64,
}

/// Validates that the amount is non-negative
pub fn check_nonnegative_amount(amount: i128) -> Result<(), ConnectorError> {
    if amount < 0 {
        Err(ConnectorError::NegativeNotAllowed)
    } else {
        Ok(())
    }
}

#[contract]
pub struct DepositConnector;

#[contractimpl]
impl DepositConnector {
    /// Initialize the connector with its tokens and collaborators
    ///
    /// ## Parameters:
    /// - `owner`: Sole authority for fee, pause and configuration changes
    /// - `base_token`: Token depositors pay in when a swap route is supplied
    /// - `settlement_token`: Token accepted by the delay vault
    /// - `router`: Multi-hop exchange router
    /// - `vault`: Delay vault receiving the net deposits
    /// - `pool_fee_tier`: Pool fee used for hops that do not specify one
    /// - `fee_bps`: Initial protocol fee, at most `MAX_FEE_BPS`
    pub fn __constructor(
        e: Env,
        owner: Address,
        base_token: Address,
        settlement_token: Address,
        router: Address,
        vault: Address,
        pool_fee_tier: u32,
        fee_bps: u32,
    ) {
        let this = e.current_contract_address();
        let collaborators = [&base_token, &settlement_token, &router, &vault];
        if collaborators.iter().any(|address| **address == this) || router == vault {
            panic_with_error!(&e, ConnectorError::InvalidAddress);
        }
        if fee::check_fee_bps(fee_bps).is_err() {
            panic_with_error!(&e, ConnectorError::InvalidFee);
        }

        write_owner(&e, &owner);
        write_fee_bps(&e, fee_bps);
        write_config(
            &e,
            &ConnectorConfig {
                base_token,
                settlement_token,
                router,
                vault,
                pool_fee_tier,
                tier_floor: constants::DEFAULT_TIER_FLOOR,
                tier_multiplier: constants::DEFAULT_TIER_MULTIPLIER,
            },
        );
        write_state_version(&e, STATE_VERSION);
        extend_instance_ttl(&e);
    }

    pub fn name(e: Env) -> String {
        String::from_str(&e, CONTRACT_NAME)
    }

    pub fn version(e: Env) -> String {
        String::from_str(&e, CONTRACT_VERSION)
    }

    /// Deposit into the delay vault, converting through the router if a route is given
    ///
    /// ## What This Does:
    /// 1. Rejects the call while the connector is paused
    /// 2. Checks the depositor approved the connector for `amount_in`
    /// 3. Checks `amount_in` does not skip a tier
    /// 4. Pulls `amount_in` and swaps it along `path` (identity when empty)
    /// 5. Keeps the protocol fee out of the swapped amount
    /// 6. Forwards the rest to the delay vault
    /// 7. Records `amount_in` in the depositor's tier history for the token paid in
    /// 8. Emits the deposit event with the route fingerprint
    ///
    /// ## Parameters:
    /// - `depositor`: The user depositing (must sign the transaction)
    /// - `amount_in`: Amount pulled from the depositor
    /// - `amount_out_min`: Slippage guard on the settlement amount out of the swap
    /// - `path`: Hops from the base token to the settlement token, or empty
    ///
    /// ## Returns:
    /// The swapped amount, fee, net amount delivered and vault position
    pub fn create_deposit(
        e: Env,
        depositor: Address,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<SwapHop>,
    ) -> Result<DepositReceipt, ConnectorError> {
        depositor.require_auth();
        extend_instance_ttl(&e);
        require_not_paused(&e)?;

        if amount_in <= 0 {
            return Err(ConnectorError::InvalidAmount);
        }
        check_nonnegative_amount(amount_out_min)?;

        let config = read_config(&e)?;
        let source_token = swap::source_token(&config, &path);
        let source = token::Client::new(&e, &source_token);
        if source.allowance(&depositor, &e.current_contract_address()) < amount_in {
            return Err(ConnectorError::NoAllowance);
        }

        tier::validate(&e, &config, &depositor, &source_token, amount_in)?;

        let swapped_amount =
            swap::swap(&e, &config, &depositor, amount_in, &path, amount_out_min)?;
        let (net_amount, fee) = fee::apply_fee(&e, swapped_amount)?;
        let position = bridge::forward(&e, &config, &depositor, net_amount);
        tier::record(&e, &depositor, &source_token, amount_in);

        let fingerprint = swap::path_fingerprint(&e, &path);
        events::deposit_created(&e, &depositor, amount_in, &fingerprint, net_amount);
        log!(&e, "deposit accepted", depositor, amount_in, net_amount, position);

        Ok(DepositReceipt {
            swapped_amount,
            fee,
            net_amount,
            position,
        })
    }

    /// True if a routed deposit of `amount` base token would put `depositor`
    /// in a higher tier than their recorded history.
    pub fn check_increase_tier(
        e: Env,
        depositor: Address,
        amount: i128,
    ) -> Result<bool, ConnectorError> {
        let config = read_config(&e)?;
        let base_token = config.base_token.clone();
        Ok(tier::check_increase_tier(&e, &config, &depositor, &base_token, amount))
    }

    /// Same as `check_increase_tier` for deposits paid in `token`.
    pub fn check_increase_tier_for(
        e: Env,
        depositor: Address,
        token: Address,
        amount: i128,
    ) -> Result<bool, ConnectorError> {
        let config = read_config(&e)?;
        Ok(tier::check_increase_tier(&e, &config, &depositor, &token, amount))
    }

    pub fn tier_of(e: Env, depositor: Address, token: Address) -> Result<u32, ConnectorError> {
        let config = read_config(&e)?;
        let record = read_tier_record(&e, &depositor, &token);
        Ok(TierBuckets::from_config(&config).tier_of(record.last_amount))
    }

    /// Largest single deposit `depositor` made in `token`.
    pub fn last_amount(e: Env, depositor: Address, token: Address) -> i128 {
        read_tier_record(&e, &depositor, &token).last_amount
    }

    /// Vault position of the depositor's latest deposit, if any.
    pub fn position_of(e: Env, depositor: Address) -> Option<u64> {
        read_position(&e, &depositor)
    }

    /// Fingerprint published with the deposit event for `path`.
    pub fn path_fingerprint(e: Env, path: Vec<SwapHop>) -> BytesN<32> {
        swap::path_fingerprint(&e, &path)
    }

    // Fees

    pub fn set_fee(e: Env, caller: Address, fee_bps: u32) -> Result<(), ConnectorError> {
        extend_instance_ttl(&e);
        fee::set_fee(&e, &caller, fee_bps)
    }

    pub fn fee_bps(e: Env) -> u32 {
        read_fee_bps(&e)
    }

    pub fn max_fee_bps(_e: Env) -> u32 {
        MAX_FEE_BPS
    }

    pub fn accrued_fee(e: Env) -> i128 {
        read_accrued_fee(&e)
    }

    /// Amount left after deducting the current fee from `amount`.
    pub fn calc_minus_fee(e: Env, amount: i128) -> Result<i128, ConnectorError> {
        check_nonnegative_amount(amount)?;
        let (net, _) = fee::split_fee(amount, read_fee_bps(&e))?;
        Ok(net)
    }

    /// Transfers the accrued fee to the owner and returns the amount sent.
    pub fn withdraw_fee(e: Env, caller: Address) -> Result<i128, ConnectorError> {
        extend_instance_ttl(&e);
        fee::withdraw_fee(&e, &caller)
    }

    // Access control

    pub fn owner(e: Env) -> Result<Address, ConnectorError> {
        read_owner(&e)
    }

    pub fn transfer_ownership(
        e: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ConnectorError> {
        extend_instance_ttl(&e);
        access::transfer_ownership(&e, &caller, &new_owner)
    }

    pub fn paused(e: Env) -> bool {
        storage::is_paused(&e)
    }

    pub fn pause(e: Env, caller: Address) -> Result<(), ConnectorError> {
        extend_instance_ttl(&e);
        access::pause(&e, &caller)
    }

    pub fn unpause(e: Env, caller: Address) -> Result<(), ConnectorError> {
        extend_instance_ttl(&e);
        access::unpause(&e, &caller)
    }

    // Configuration

    pub fn config(e: Env) -> Result<ConnectorConfig, ConnectorError> {
        read_config(&e)
    }

    pub fn set_pool_fee_tier(
        e: Env,
        caller: Address,
        pool_fee_tier: u32,
    ) -> Result<(), ConnectorError> {
        require_owner(&e, &caller)?;
        extend_instance_ttl(&e);
        let mut config = read_config(&e)?;
        config.pool_fee_tier = pool_fee_tier;
        write_config(&e, &config);
        Ok(())
    }

    /// Replace the tier buckets. Existing tier records are kept as amounts,
    /// so depositors are re-bucketed under the new thresholds.
    pub fn set_tier_config(
        e: Env,
        caller: Address,
        tier_floor: i128,
        tier_multiplier: u32,
    ) -> Result<(), ConnectorError> {
        require_owner(&e, &caller)?;
        extend_instance_ttl(&e);
        let buckets = TierBuckets::new(tier_floor, tier_multiplier)?;
        let mut config = read_config(&e)?;
        config.tier_floor = buckets.floor;
        config.tier_multiplier = buckets.multiplier;
        write_config(&e, &config);
        Ok(())
    }

    // State layout

    pub fn state_version(e: Env) -> u32 {
        read_state_version(&e)
    }

    /// Rewrite stored state in the current layout
    ///
    /// Older layouts are still readable without this; migrating persists the
    /// appended fields. Safe to call again once current.
    ///
    /// ## Returns:
    /// The layout version now stored
    pub fn migrate(e: Env, caller: Address) -> Result<u32, ConnectorError> {
        require_owner(&e, &caller)?;
        extend_instance_ttl(&e);
        let stored = read_stored_config(&e).ok_or(ConnectorError::NotInitialized)?;
        let from_version = read_state_version(&e).min(stored.version());
        write_config(&e, &stored.into_current());
        write_state_version(&e, STATE_VERSION);

        if from_version != STATE_VERSION {
            log!(&e, "state migrated", from_version, STATE_VERSION);
            events::migrated(&e, from_version, STATE_VERSION);
        }
        Ok(STATE_VERSION)
    }
}

#[cfg(test)]
mod test;
