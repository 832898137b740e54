//! Owner and pause guards composed into each entry point.

use soroban_sdk::{log, Address, Env};

use crate::error::ConnectorError;
use crate::events;
use crate::storage::{is_paused, read_owner, set_paused, write_owner};

/// Checks that `caller` is the stored owner and that it signed the invocation.
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), ConnectorError> {
    let owner = read_owner(e)?;
    if *caller != owner {
        return Err(ConnectorError::NotOwner);
    }
    caller.require_auth();
    Ok(())
}

pub fn require_not_paused(e: &Env) -> Result<(), ConnectorError> {
    if is_paused(e) {
        return Err(ConnectorError::Paused);
    }
    Ok(())
}

pub fn pause(e: &Env, caller: &Address) -> Result<(), ConnectorError> {
    require_owner(e, caller)?;
    require_not_paused(e)?;
    set_paused(e, true);
    log!(e, "connector paused", caller.clone());
    events::paused(e, caller);
    Ok(())
}

pub fn unpause(e: &Env, caller: &Address) -> Result<(), ConnectorError> {
    require_owner(e, caller)?;
    if !is_paused(e) {
        return Err(ConnectorError::NotPaused);
    }
    set_paused(e, false);
    log!(e, "connector unpaused", caller.clone());
    events::unpaused(e, caller);
    Ok(())
}

pub fn transfer_ownership(
    e: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), ConnectorError> {
    require_owner(e, caller)?;
    write_owner(e, new_owner);
    events::ownership_transferred(e, caller, new_owner);
    Ok(())
}
