// Ledger Configuration State
//
// One per staking mint and operator. Holds the operator identity, the vault
// that custodies both principal and rewards, and the reward pool counter
// shared by every position of the ledger.

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    pub operator: Pubkey,          // Assigns yields, funds and drains the pool
    pub token_mint: Pubkey,        // Staked and paid-out asset
    pub vault: Pubkey,             // Token account owned by the vault authority PDA
    pub available_rewards: u64,    // Reward pool, debited only when a claim pays out
    pub ledger_bump: u8,
    pub vault_authority_bump: u8,
}

/// Read-only snapshot returned by `get_ledger`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerView {
    pub operator: Pubkey,
    pub token_mint: Pubkey,
    pub available_rewards: u64,
}

impl LedgerConfig {
    pub fn assert_is_operator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.operator, *caller, StakingError::UnauthorizedOperator);
        Ok(())
    }

    /// Credit operator funding to the pool, returning the new pool balance.
    pub fn credit_rewards(&mut self, amount: u64) -> Result<u64> {
        self.available_rewards = self.available_rewards
            .checked_add(amount)
            .ok_or(StakingError::Overflow)?;
        Ok(self.available_rewards)
    }

    /// Debit a claim payout. An empty pool and a short pool are reported
    /// separately, and nothing is debited unless the whole amount is covered.
    pub fn debit_rewards(&mut self, amount: u64) -> Result<()> {
        require!(self.available_rewards > 0, StakingError::NoRewardsAvailable);
        require!(
            self.available_rewards >= amount,
            StakingError::NotEnoughRewardsAvailable
        );
        self.available_rewards = self.available_rewards
            .checked_sub(amount)
            .ok_or(StakingError::Underflow)?;
        Ok(())
    }

    /// Drain the whole pool. Returns 0 when there is nothing to drain.
    pub fn sweep_rewards(&mut self) -> u64 {
        std::mem::take(&mut self.available_rewards)
    }

    pub fn view(&self) -> LedgerView {
        LedgerView {
            operator: self.operator,
            token_mint: self.token_mint,
            available_rewards: self.available_rewards,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_rewards(available_rewards: u64) -> Self {
        LedgerConfig {
            operator: Pubkey::new_unique(),
            available_rewards,
            ..LedgerConfig::default()
        }
    }
}
