use soroban_sdk::{contractevent, Address, BytesN, Env};

#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeChanged {
    pub fee_bps: u32,
}

#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeWithdrawn {
    #[topic]
    pub owner: Address,
    pub amount: i128,
}

/// Deposit accepted. Data is `[amount_in, fingerprint, net_amount]`.
#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositCreated {
    #[topic]
    pub depositor: Address,
    pub amount_in: i128,
    pub fingerprint: BytesN<32>,
    pub net_amount: i128,
}

#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paused {
    #[topic]
    pub caller: Address,
}

#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unpaused {
    #[topic]
    pub caller: Address,
}

#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferred {
    #[topic]
    pub previous: Address,
    pub new_owner: Address,
}

#[contractevent(data_format = "vec")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateMigrated {
    pub from_version: u32,
    pub to_version: u32,
}

pub fn fee_changed(e: &Env, fee_bps: u32) {
    FeeChanged { fee_bps }.publish(e);
}

pub fn fee_withdrawn(e: &Env, owner: &Address, amount: i128) {
    FeeWithdrawn {
        owner: owner.clone(),
        amount,
    }
    .publish(e);
}

pub fn deposit_created(
    e: &Env,
    depositor: &Address,
    amount_in: i128,
    fingerprint: &BytesN<32>,
    net_amount: i128,
) {
    DepositCreated {
        depositor: depositor.clone(),
        amount_in,
        fingerprint: fingerprint.clone(),
        net_amount,
    }
    .publish(e);
}

pub fn paused(e: &Env, caller: &Address) {
    Paused {
        caller: caller.clone(),
    }
    .publish(e);
}

pub fn unpaused(e: &Env, caller: &Address) {
    Unpaused {
        caller: caller.clone(),
    }
    .publish(e);
}

pub fn ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    OwnershipTransferred {
        previous: previous.clone(),
        new_owner: new_owner.clone(),
    }
    .publish(e);
}

pub fn migrated(e: &Env, from_version: u32, to_version: u32) {
    StateMigrated {
        from_version,
        to_version,
    }
    .publish(e);
}
