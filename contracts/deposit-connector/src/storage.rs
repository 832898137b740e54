use soroban_sdk::{contracttype, Address, Env};

use crate::constants::{
    DEFAULT_TIER_FLOOR, DEFAULT_TIER_MULTIPLIER, INSTANCE_BUMP_AMOUNT,
    INSTANCE_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};
use crate::error::ConnectorError;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Paused,
    Config,
    StateVersion,
    FeeBps,
    AccruedFee,
    /// Tier history of a depositor, per token the amounts are counted in
    Tier(Address, Address),
    Position(Address),
}

/// First connector layout, before the tier gate became configurable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigV1 {
    pub base_token: Address,
    pub settlement_token: Address,
    pub router: Address,
    pub vault: Address,
    pub pool_fee_tier: u32,
}

/// Current connector layout.
///
/// Fields are append-only: everything from `ConfigV1` keeps its position and
/// meaning, new fields go at the end.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectorConfig {
    /// Token pulled from the depositor when a swap route is supplied
    pub base_token: Address,
    /// Token the delay vault accepts and the fee accrues in
    pub settlement_token: Address,
    pub router: Address,
    pub vault: Address,
    /// Pool fee used for hops that do not name one
    pub pool_fee_tier: u32,
    pub tier_floor: i128,
    pub tier_multiplier: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoredConfig {
    V1(ConfigV1),
    V2(ConnectorConfig),
}

impl StoredConfig {
    pub fn version(&self) -> u32 {
        match self {
            StoredConfig::V1(_) => 1,
            StoredConfig::V2(_) => 2,
        }
    }

    /// Lifts any stored layout to the current one, filling appended fields
    /// with their defaults.
    pub fn into_current(self) -> ConnectorConfig {
        match self {
            StoredConfig::V1(v1) => ConnectorConfig {
                base_token: v1.base_token,
                settlement_token: v1.settlement_token,
                router: v1.router,
                vault: v1.vault,
                pool_fee_tier: v1.pool_fee_tier,
                tier_floor: DEFAULT_TIER_FLOOR,
                tier_multiplier: DEFAULT_TIER_MULTIPLIER,
            },
            StoredConfig::V2(config) => config,
        }
    }
}

/// Historical tier of a single depositor in one token.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TierRecord {
    pub last_amount: i128,
}

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent_ttl(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// Config

pub fn read_stored_config(e: &Env) -> Option<StoredConfig> {
    e.storage().instance().get(&DataKey::Config)
}

pub fn write_stored_config(e: &Env, config: &StoredConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(e: &Env) -> Result<ConnectorConfig, ConnectorError> {
    read_stored_config(e)
        .map(StoredConfig::into_current)
        .ok_or(ConnectorError::NotInitialized)
}

pub fn write_config(e: &Env, config: &ConnectorConfig) {
    write_stored_config(e, &StoredConfig::V2(config.clone()));
}

pub fn read_state_version(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::StateVersion)
        .unwrap_or(1)
}

pub fn write_state_version(e: &Env, version: u32) {
    e.storage().instance().set(&DataKey::StateVersion, &version);
}

// Access control

pub fn read_owner(e: &Env) -> Result<Address, ConnectorError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ConnectorError::NotInitialized)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
}

// Fees

pub fn read_fee_bps(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::FeeBps).unwrap_or(0)
}

pub fn write_fee_bps(e: &Env, fee_bps: u32) {
    e.storage().instance().set(&DataKey::FeeBps, &fee_bps);
}

pub fn read_accrued_fee(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::AccruedFee).unwrap_or(0)
}

pub fn write_accrued_fee(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::AccruedFee, &amount);
}

// Depositors

pub fn read_tier_record(e: &Env, depositor: &Address, token: &Address) -> TierRecord {
    e.storage()
        .persistent()
        .get(&DataKey::Tier(depositor.clone(), token.clone()))
        .unwrap_or_default()
}

pub fn write_tier_record(e: &Env, depositor: &Address, token: &Address, record: &TierRecord) {
    let key = DataKey::Tier(depositor.clone(), token.clone());
    e.storage().persistent().set(&key, record);
    extend_persistent_ttl(e, &key);
}

pub fn read_position(e: &Env, depositor: &Address) -> Option<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::Position(depositor.clone()))
}

pub fn write_position(e: &Env, depositor: &Address, position: u64) {
    let key = DataKey::Position(depositor.clone());
    e.storage().persistent().set(&key, &position);
    extend_persistent_ttl(e, &key);
}
