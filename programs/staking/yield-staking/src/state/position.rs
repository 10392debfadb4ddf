// Position State
//
// Per-account record of stake and yield balances.
// Seeds: ["position", ledger, owner]
//
// Principal and yield are tracked independently: withdrawing principal never
// touches yield, and claiming never touches principal or its lock.

use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, state::LedgerConfig};

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Position {
    /// Account this position belongs to
    pub owner: Pubkey,

    /// Principal under lock, 0 when there is no active stake
    pub staked_amount: u64,

    /// Unix timestamp the principal unlocks at, 0 when there is no active stake
    pub locked_until: i64,

    /// Yield that can be claimed right away
    pub yield_available: u64,

    /// Yield assigned by the operator that has not vested yet
    pub yield_locked: u64,

    /// Unix timestamp of the latest yield assignment, 0 if never assigned
    pub last_yield_update: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Read-only snapshot returned by `get_position`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionView {
    pub staked_amount: u64,
    pub locked_until: i64,
    pub yield_available: u64,
    pub yield_locked: u64,
    pub last_yield_update: i64,
}

impl Position {
    /// Record the owner and bump on a position created by `init_if_needed`.
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn is_staked(&self) -> bool {
        self.staked_amount != 0
    }

    /// Open a stake locked for `lock_duration` seconds. Returns the unlock time.
    pub fn open_stake(&mut self, amount: u64, lock_duration: i64, now: i64) -> Result<i64> {
        require!(amount > 0, StakingError::AmountZero);
        require!(!self.is_staked(), StakingError::AlreadyStaked);
        require!(lock_duration <= MAX_LOCK, StakingError::LockTooLong);
        require!(lock_duration >= MIN_LOCK, StakingError::LockTooShort);

        let locked_until = now
            .checked_add(lock_duration)
            .ok_or(StakingError::Overflow)?;

        self.staked_amount = amount;
        self.locked_until = locked_until;
        Ok(locked_until)
    }

    /// Add principal to an active stake. The lock expiry is left as is.
    pub fn add_to_stake(&mut self, amount: u64) -> Result<()> {
        require!(self.is_staked(), StakingError::NotStaked);
        require!(amount > 0, StakingError::AmountZero);

        self.staked_amount = self.staked_amount
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;
        Ok(())
    }

    /// Whether a full epoch has passed since the latest yield assignment.
    pub fn has_vested(&self, now: i64) -> Result<bool> {
        let vests_at = self.last_yield_update
            .checked_add(EPOCH)
            .ok_or(StakingError::Overflow)?;
        Ok(now >= vests_at)
    }

    /// Pay out available yield plus any locked yield whose epoch has elapsed,
    /// debiting the shared pool. Returns the amount to transfer.
    ///
    /// Check order: own claimable balance first, then an empty pool, then a
    /// pool too small for the whole amount. Nothing is mutated on failure.
    pub fn claim(&mut self, ledger: &mut LedgerConfig, now: i64) -> Result<u64> {
        let vested = self.has_vested(now)?;
        let vested_amount = if vested { self.yield_locked } else { 0 };

        let total = self.yield_available
            .checked_add(vested_amount)
            .ok_or(StakingError::Overflow)?;
        require!(total > 0, StakingError::NothingToClaim);

        ledger.debit_rewards(total)?;

        self.yield_available = 0;
        if vested {
            self.yield_locked = 0;
        }
        Ok(total)
    }

    /// Release the principal once the lock has expired. Returns the amount to
    /// transfer. Yield balances are kept.
    pub fn withdraw_principal(&mut self, now: i64) -> Result<u64> {
        require!(self.is_staked(), StakingError::NothingToWithdraw);
        require!(self.locked_until <= now, StakingError::CannotWithdrawYet);

        let amount = self.staked_amount;
        self.staked_amount = 0;
        self.locked_until = 0;
        Ok(amount)
    }

    /// Withdraw principal and claim yield as one unit. Both steps run against
    /// copies of the position and the pool, which are committed only when both
    /// succeed. Returns `(principal, claimed)`.
    pub fn withdraw_and_claim(&mut self, ledger: &mut LedgerConfig, now: i64) -> Result<(u64, u64)> {
        let mut position = self.clone();
        let mut pool = ledger.clone();

        let principal = position.withdraw_principal(now)?;
        let claimed = position.claim(&mut pool, now)?;

        *self = position;
        *ledger = pool;
        Ok((principal, claimed))
    }

    /// Operator yield assignment. Whatever was locked vests immediately, then
    /// `new_amount` replaces the locked figure and restarts the epoch.
    pub fn assign_yield(&mut self, new_amount: u64, now: i64) -> Result<()> {
        self.yield_available = self.yield_available
            .checked_add(self.yield_locked)
            .ok_or(StakingError::Overflow)?;
        self.yield_locked = new_amount;
        self.last_yield_update = now;
        Ok(())
    }

    pub fn view(&self) -> PositionView {
        PositionView {
            staked_amount: self.staked_amount,
            locked_until: self.locked_until,
            yield_available: self.yield_available,
            yield_locked: self.yield_locked,
            last_yield_update: self.last_yield_update,
        }
    }
}
