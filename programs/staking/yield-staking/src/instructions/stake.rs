// Stake Instructions
//
// stake: open a time-locked stake (one active stake per account)
// add_to_stake: top up an active stake without moving its lock expiry
//
// The position PDA is created on first use. Added principal is only reflected
// in yield once the operator assigns the next round.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Stake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    // Position PDA
    // Seeds: ["position", ledger, owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Position::INIT_SPACE,
        seeds = [POSITION_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    #[account(address = ledger.token_mint @ StakingError::InvalidTokenMint)]
    pub token_mint: Account<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = token_mint,
        associated_token::authority = owner,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = ledger.vault @ StakingError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Stake<'info> {
    pub fn stake(&mut self, amount: u64, lock_duration: i64, bumps: &StakeBumps) -> Result<()> {
        let owner = self.owner.key();
        self.position.bind(owner, bumps.position);

        let now = Clock::get()?.unix_timestamp;
        let locked_until = self.position.open_stake(amount, lock_duration, now)?;

        self.deposit(amount)?;

        emit!(Deposit {
            owner,
            amount,
            locked_until,
        });
        msg!("Staked {} until {}", amount, locked_until);

        Ok(())
    }

    pub fn add_to_stake(&mut self, amount: u64, bumps: &StakeBumps) -> Result<()> {
        let owner = self.owner.key();
        self.position.bind(owner, bumps.position);

        self.position.add_to_stake(amount)?;

        self.deposit(amount)?;

        emit!(Add { owner, amount });
        msg!("Added {} to stake, now {}", amount, self.position.staked_amount);

        Ok(())
    }

    fn deposit(&self, amount: u64) -> Result<()> {
        transfer_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.owner_token_account.to_account_info(),
            &self.vault.to_account_info(),
            &self.owner.to_account_info(),
        )
    }
}
