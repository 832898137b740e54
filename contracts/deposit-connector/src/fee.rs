//! Protocol fee: rate, accrual and withdrawal.

use soroban_sdk::{log, token, Address, Env};

use crate::access::require_owner;
use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS};
use crate::error::ConnectorError;
use crate::events;
use crate::storage::{
    read_accrued_fee, read_config, read_fee_bps, write_accrued_fee, write_fee_bps,
};

pub fn check_fee_bps(fee_bps: u32) -> Result<(), ConnectorError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(ConnectorError::InvalidFee);
    }
    Ok(())
}

/// Splits `amount` into `(net, fee)` with `fee = floor(amount * fee_bps / 10_000)`.
pub fn split_fee(amount: i128, fee_bps: u32) -> Result<(i128, i128), ConnectorError> {
    let fee = amount
        .checked_mul(fee_bps as i128)
        .ok_or(ConnectorError::ArithmeticError)?
        / BPS_DENOMINATOR;
    let net = amount
        .checked_sub(fee)
        .ok_or(ConnectorError::ArithmeticError)?;
    Ok((net, fee))
}

pub fn set_fee(e: &Env, caller: &Address, fee_bps: u32) -> Result<(), ConnectorError> {
    require_owner(e, caller)?;
    check_fee_bps(fee_bps)?;
    write_fee_bps(e, fee_bps);
    log!(e, "fee changed", fee_bps);
    events::fee_changed(e, fee_bps);
    Ok(())
}

/// Deducts the current fee from `amount` and accrues it for the owner.
pub fn apply_fee(e: &Env, amount: i128) -> Result<(i128, i128), ConnectorError> {
    let (net, fee) = split_fee(amount, read_fee_bps(e))?;
    if fee > 0 {
        let accrued = read_accrued_fee(e)
            .checked_add(fee)
            .ok_or(ConnectorError::ArithmeticError)?;
        write_accrued_fee(e, accrued);
    }
    Ok((net, fee))
}

/// Sends the whole accrued fee, in settlement token, to the owner.
pub fn withdraw_fee(e: &Env, caller: &Address) -> Result<i128, ConnectorError> {
    require_owner(e, caller)?;
    let accrued = read_accrued_fee(e);
    if accrued == 0 {
        return Err(ConnectorError::ZeroBalance);
    }

    let config = read_config(e)?;
    write_accrued_fee(e, 0);
    token::Client::new(e, &config.settlement_token).transfer(
        &e.current_contract_address(),
        caller,
        &accrued,
    );

    log!(e, "fee withdrawn", accrued);
    events::fee_withdrawn(e, caller, accrued);
    Ok(accrued)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_adds_back_to_amount() {
        for amount in [0i128, 1, 9, 10, 99, 100, 12_345, 1_000_000_007] {
            for fee_bps in [0u32, 1, 30, 999, 1_000] {
                let (net, fee) = split_fee(amount, fee_bps).unwrap();
                assert_eq!(net + fee, amount);
                assert!(net <= amount);
                if fee_bps == 0 {
                    assert_eq!(fee, 0);
                }
            }
        }
    }

    #[test]
    fn split_floors_the_fee() {
        assert_eq!(split_fee(100, 1_000).unwrap(), (90, 10));
        assert_eq!(split_fee(9, 1_000).unwrap(), (9, 0));
        assert_eq!(split_fee(19, 1_000).unwrap(), (18, 1));
    }

    #[test]
    fn split_reports_overflow() {
        assert_eq!(
            split_fee(i128::MAX, 1_000),
            Err(ConnectorError::ArithmeticError)
        );
    }

    #[test]
    fn fee_bound_is_inclusive() {
        assert_eq!(check_fee_bps(MAX_FEE_BPS), Ok(()));
        assert_eq!(check_fee_bps(MAX_FEE_BPS + 1), Err(ConnectorError::InvalidFee));
    }
}
