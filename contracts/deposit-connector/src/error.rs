use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConnectorError {
    /// Fee is above `MAX_FEE_BPS`
    InvalidFee = 1,
    /// Nothing accrued to withdraw
    ZeroBalance = 2,
    /// Depositor has not approved the connector for the full amount
    NoAllowance = 3,
    /// Swap output below the caller's minimum
    InsufficientOutputAmount = 4,
    /// Deposit skips more than one tier ahead
    UpdateYourTier = 5,
    /// Deposits are paused
    Paused = 6,
    /// Unpause requested while running
    NotPaused = 7,
    /// Caller is not the owner
    NotOwner = 8,
    /// Collaborator address rejected at construction
    InvalidAddress = 9,
    /// Swap path does not end in the settlement token or is too long
    InvalidPath = 10,
    /// Deposit amount must be positive
    InvalidAmount = 11,

    NegativeNotAllowed = 12,
    /// Tier floor must be positive and the multiplier at least 2
    InvalidTierConfig = 13,
    /// Overflow in fee or tier math
    ArithmeticError = 14,
    /// Connector state was never written
    NotInitialized = 15,
}
