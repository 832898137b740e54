//! Optional conversion of a deposit into the settlement token.

use soroban_sdk::{token, xdr::ToXdr, Address, BytesN, Env, Vec};

use crate::constants::MAX_HOPS;
use crate::error::ConnectorError;
use crate::router::{ExchangeRouterClient, SwapHop};
use crate::storage::ConnectorConfig;

/// Token pulled from the depositor: the base token for a routed deposit,
/// the settlement token when no route is given.
pub fn source_token(config: &ConnectorConfig, path: &Vec<SwapHop>) -> Address {
    if path.is_empty() {
        config.settlement_token.clone()
    } else {
        config.base_token.clone()
    }
}

/// SHA-256 over the XDR encoding of the path as the caller supplied it.
pub fn path_fingerprint(e: &Env, path: &Vec<SwapHop>) -> BytesN<32> {
    e.crypto().sha256(&path.clone().to_xdr(e)).to_bytes()
}

/// Checks the route and fills in the default pool fee for hops without one.
pub fn resolve_route(
    e: &Env,
    config: &ConnectorConfig,
    path: &Vec<SwapHop>,
) -> Result<Vec<SwapHop>, ConnectorError> {
    if path.len() > MAX_HOPS {
        return Err(ConnectorError::InvalidPath);
    }
    match path.last() {
        Some(last) if last.token == config.settlement_token => {}
        _ => return Err(ConnectorError::InvalidPath),
    }

    let mut route = Vec::new(e);
    let mut from = config.base_token.clone();
    for hop in path.iter() {
        if hop.token == from {
            return Err(ConnectorError::InvalidPath);
        }
        from = hop.token.clone();
        let fee = if hop.fee == 0 { config.pool_fee_tier } else { hop.fee };
        route.push_back(SwapHop { token: hop.token, fee });
    }
    Ok(route)
}

/// Single place where the slippage guard is enforced.
///
/// `router_ok` is false when the router itself refused the swap; either way
/// the caller sees `InsufficientOutputAmount`.
pub fn ensure_min_output(
    router_ok: bool,
    realized: i128,
    amount_out_min: i128,
) -> Result<i128, ConnectorError> {
    if !router_ok || realized < amount_out_min {
        return Err(ConnectorError::InsufficientOutputAmount);
    }
    Ok(realized)
}

/// Moves `amount_in` from the depositor into the connector and, when a route
/// is given, converts it into the settlement token. Base token the router did
/// not take goes back to the depositor.
///
/// Returns the settlement amount now held for this deposit.
pub fn swap(
    e: &Env,
    config: &ConnectorConfig,
    depositor: &Address,
    amount_in: i128,
    path: &Vec<SwapHop>,
    amount_out_min: i128,
) -> Result<i128, ConnectorError> {
    let this = e.current_contract_address();
    let source = token::Client::new(e, &source_token(config, path));

    if path.is_empty() {
        source.transfer_from(&this, depositor, &this, &amount_in);
        return Ok(amount_in);
    }

    let route = resolve_route(e, config, path)?;
    source.transfer_from(&this, depositor, &this, &amount_in);

    let settlement = token::Client::new(e, &config.settlement_token);
    let settlement_before = settlement.balance(&this);
    let source_before = source.balance(&this);

    // exact allowance, valid for this ledger only
    source.approve(&this, &config.router, &amount_in, &e.ledger().sequence());

    let router = ExchangeRouterClient::new(e, &config.router);
    let router_ok = matches!(
        router.try_swap_multi_hop(
            &this,
            &config.base_token,
            &amount_in,
            &route,
            &amount_out_min,
            &this,
        ),
        Ok(Ok(_))
    );

    if source.allowance(&this, &config.router) > 0 {
        source.approve(&this, &config.router, &0, &e.ledger().sequence());
    }

    let realized = settlement.balance(&this) - settlement_before;
    let swapped = ensure_min_output(router_ok, realized, amount_out_min)?;

    let spent = source_before - source.balance(&this);
    let unspent = amount_in - spent;
    if unspent > 0 {
        source.transfer(&this, depositor, &unspent);
    }
    Ok(swapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_refusal_and_short_output_look_the_same() {
        assert_eq!(
            ensure_min_output(false, 0, 10),
            Err(ConnectorError::InsufficientOutputAmount)
        );
        assert_eq!(
            ensure_min_output(true, 9, 10),
            Err(ConnectorError::InsufficientOutputAmount)
        );
        assert_eq!(ensure_min_output(true, 10, 10), Ok(10));
    }
}
