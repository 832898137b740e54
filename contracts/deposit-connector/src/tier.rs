//! Tier gate: a depositor climbs deposit-size tiers one step at a time.
//!
//! Tiers are geometric buckets above `tier_floor`. Anything below the floor is
//! tier 0, `[floor, floor * m)` is tier 1, `[floor * m, floor * m^2)` is tier 2,
//! and so on.
//!
//! History is kept per token the deposit was paid in, so amounts of two
//! differently priced tokens are never compared with each other.

use soroban_sdk::{Address, Env};

use crate::constants::MAX_TIER_STEP;
use crate::error::ConnectorError;
use crate::storage::{read_tier_record, write_tier_record, ConnectorConfig, TierRecord};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierBuckets {
    pub floor: i128,
    pub multiplier: u32,
}

impl TierBuckets {
    pub fn new(floor: i128, multiplier: u32) -> Result<Self, ConnectorError> {
        if floor <= 0 || multiplier < 2 {
            return Err(ConnectorError::InvalidTierConfig);
        }
        Ok(Self { floor, multiplier })
    }

    pub fn from_config(config: &ConnectorConfig) -> Self {
        Self {
            floor: config.tier_floor,
            multiplier: config.tier_multiplier,
        }
    }

    pub fn tier_of(&self, amount: i128) -> u32 {
        if amount < self.floor {
            return 0;
        }
        let mut tier = 1;
        let mut upper = self.floor;
        loop {
            // once the next bound overflows, nothing representable lies above it
            match upper.checked_mul(self.multiplier as i128) {
                Some(next) if amount >= next => {
                    upper = next;
                    tier += 1;
                }
                _ => return tier,
            }
        }
    }

    /// True when `amount` lands in a strictly higher bucket than `last_amount`.
    pub fn is_increase(&self, last_amount: i128, amount: i128) -> bool {
        self.tier_of(amount) > self.tier_of(last_amount)
    }

    /// A first deposit may be of any size; later ones may climb at most
    /// `MAX_TIER_STEP` tiers above the recorded amount.
    pub fn check_step(&self, last_amount: i128, amount: i128) -> Result<(), ConnectorError> {
        if last_amount == 0 {
            return Ok(());
        }
        let allowed = self.tier_of(last_amount).saturating_add(MAX_TIER_STEP);
        if self.tier_of(amount) > allowed {
            return Err(ConnectorError::UpdateYourTier);
        }
        Ok(())
    }
}

pub fn check_increase_tier(
    e: &Env,
    config: &ConnectorConfig,
    depositor: &Address,
    token: &Address,
    amount: i128,
) -> bool {
    let record = read_tier_record(e, depositor, token);
    TierBuckets::from_config(config).is_increase(record.last_amount, amount)
}

pub fn validate(
    e: &Env,
    config: &ConnectorConfig,
    depositor: &Address,
    token: &Address,
    amount: i128,
) -> Result<(), ConnectorError> {
    let record = read_tier_record(e, depositor, token);
    TierBuckets::from_config(config).check_step(record.last_amount, amount)
}

/// Keeps the largest single accepted deposit.
pub fn record(e: &Env, depositor: &Address, token: &Address, amount: i128) {
    let record = read_tier_record(e, depositor, token);
    if amount > record.last_amount {
        write_tier_record(e, depositor, token, &TierRecord { last_amount: amount });
    }
}
