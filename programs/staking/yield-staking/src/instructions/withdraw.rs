// Withdraw Instructions
//
// withdraw: release expired principal, yield balances are kept
// withdraw_and_claim: release principal and claim yield in a single transfer.
// Both halves are evaluated before any tokens move; if either fails, nothing
// is withdrawn.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawStake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Position::INIT_SPACE,
        seeds = [POSITION_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub position: Account<'info, Position>,

    /// CHECK: PDA signer for the vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, ledger.key().as_ref()],
        bump = ledger.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

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

impl<'info> WithdrawStake<'info> {
    pub fn withdraw(&mut self, bumps: &WithdrawStakeBumps) -> Result<()> {
        let owner = self.owner.key();
        self.position.bind(owner, bumps.position);

        let now = Clock::get()?.unix_timestamp;
        let amount = self.position.withdraw_principal(now)?;

        self.payout(amount)?;

        emit!(Withdraw { owner, amount });
        msg!("Withdrew {} principal", amount);

        Ok(())
    }

    pub fn withdraw_and_claim(&mut self, bumps: &WithdrawStakeBumps) -> Result<()> {
        let owner = self.owner.key();
        self.position.bind(owner, bumps.position);

        let now = Clock::get()?.unix_timestamp;
        let (principal, claimed) = self.position.withdraw_and_claim(&mut self.ledger, now)?;

        let total = principal
            .checked_add(claimed)
            .ok_or(StakingError::Overflow)?;
        self.payout(total)?;

        emit!(Withdraw {
            owner,
            amount: principal,
        });
        emit!(Claim {
            owner,
            amount: claimed,
        });
        msg!("Withdrew {} principal and claimed {} yield", principal, claimed);

        Ok(())
    }

    fn payout(&self, amount: u64) -> Result<()> {
        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            &self.owner_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &self.ledger.key(),
            self.ledger.vault_authority_bump,
        )
    }
}
