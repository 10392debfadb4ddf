use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    // Input validation
    #[msg("Amount must be greater than zero")]
    AmountZero,

    #[msg("Lock duration exceeds the maximum lock period")]
    LockTooLong,

    #[msg("Lock duration is below the minimum lock period")]
    LockTooShort,

    #[msg("Accounts and yield amounts must have the same length")]
    ArraysMismatch,

    // Position state
    #[msg("Account already has an active stake")]
    AlreadyStaked,

    #[msg("Account has no active stake")]
    NotStaked,

    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    #[msg("Stake is still locked")]
    CannotWithdrawYet,

    #[msg("Nothing to claim")]
    NothingToClaim,

    // Reward pool
    #[msg("Reward pool is empty")]
    NoRewardsAvailable,

    #[msg("Reward pool cannot cover this claim")]
    NotEnoughRewardsAvailable,

    // Account validation
    #[msg("Only the ledger operator can perform this action")]
    UnauthorizedOperator,

    #[msg("Remaining account is not the position of the given owner")]
    PositionMismatch,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid vault account")]
    InvalidVault,

    // Math
    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,
}
