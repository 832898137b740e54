pub const CONTRACT_NAME: &str = "DepositConnector";
pub const CONTRACT_VERSION: &str = "1.2.0";

/// 10_000 bps = 100%
pub const BPS_DENOMINATOR: i128 = 10_000;
/// Upper bound for the protocol fee (10%)
pub const MAX_FEE_BPS: u32 = 1_000;

pub const MAX_HOPS: u32 = 4;

/// One whole unit of a 7-decimal Stellar asset.
pub const DEFAULT_TIER_FLOOR: i128 = 10_000_000;
pub const DEFAULT_TIER_MULTIPLIER: u32 = 10;
/// How many tiers a single deposit may climb above the depositor's record.
pub const MAX_TIER_STEP: u32 = 1;

/// Layout version written by `migrate`.
pub const STATE_VERSION: u32 = 2;

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
