// Yield Staking Program
//
// Time-locked staking ledger. Users lock tokens for 21 to 365 days; the
// operator assigns yield per account, which vests after a 28 day epoch or at
// the next assignment, and funds the reward pool that claims are paid from.
//
// Instructions:
// - initialize_ledger: Create ledger config and vault for a mint
// - stake / add_to_stake: Open or top up a time-locked stake
// - claim_yield: Pay out vested yield from the reward pool
// - withdraw / withdraw_and_claim: Release expired principal (and claim)
// - update_yields: Operator assigns the next round of locked yield
// - add_rewards / withdraw_rewards: Operator funds or drains the reward pool
// - get_position / get_ledger: Read-only views

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{LedgerView, PositionView};

declare_id!("CiCvhkEoUNsJTC5XAfDwqsnVNk5C5HZqNkKUqNrF3QWc");

#[program]
pub mod yield_staking {
    use super::*;

    pub fn initialize_ledger(ctx: Context<InitializeLedger>) -> Result<()> {
        ctx.accounts.initialize_ledger(&ctx.bumps)
    }

    pub fn stake(ctx: Context<Stake>, amount: u64, lock_duration: i64) -> Result<()> {
        ctx.accounts.stake(amount, lock_duration, &ctx.bumps)
    }

    pub fn add_to_stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        ctx.accounts.add_to_stake(amount, &ctx.bumps)
    }

    pub fn claim_yield(ctx: Context<ClaimYield>) -> Result<()> {
        ctx.accounts.claim_yield(&ctx.bumps)
    }

    pub fn withdraw(ctx: Context<WithdrawStake>) -> Result<()> {
        ctx.accounts.withdraw(&ctx.bumps)
    }

    pub fn withdraw_and_claim(ctx: Context<WithdrawStake>) -> Result<()> {
        ctx.accounts.withdraw_and_claim(&ctx.bumps)
    }

    pub fn update_yields<'info>(
        ctx: Context<'_, '_, '_, 'info, UpdateYields<'info>>,
        owners: Vec<Pubkey>,
        yield_amounts: Vec<u64>,
    ) -> Result<()> {
        ctx.accounts.update_yields(
            owners,
            yield_amounts,
            ctx.remaining_accounts,
            ctx.program_id,
        )
    }

    pub fn add_rewards(ctx: Context<AddRewards>, amount: u64) -> Result<()> {
        ctx.accounts.add_rewards(amount)
    }

    pub fn withdraw_rewards(ctx: Context<WithdrawRewards>) -> Result<()> {
        ctx.accounts.withdraw_rewards()
    }

    pub fn get_position(ctx: Context<GetPosition>) -> Result<PositionView> {
        ctx.accounts.get_position()
    }

    pub fn get_ledger(ctx: Context<GetLedger>) -> Result<LedgerView> {
        ctx.accounts.get_ledger()
    }
}
