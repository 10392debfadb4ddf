// Withdraw Rewards Instruction
//
// Operator-only emergency drain of the reward pool. Staked principal and
// account yield balances are untouched. Draining an empty pool is a no-op.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawRewards<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

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
        token::mint = token_mint,
        token::authority = operator,
    )]
    pub operator_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = ledger.vault @ StakingError::InvalidVault,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawRewards<'info> {
    pub fn withdraw_rewards(&mut self) -> Result<()> {
        self.ledger.assert_is_operator(&self.operator.key())?;

        let amount = self.ledger.sweep_rewards();
        if amount == 0 {
            msg!("Reward pool already empty");
            return Ok(());
        }

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault.to_account_info(),
            &self.operator_token_account.to_account_info(),
            &self.vault_authority.to_account_info(),
            &self.ledger.key(),
            self.ledger.vault_authority_bump,
        )?;

        emit!(RewardsWithdrawn { amount });
        msg!("Reward pool drained of {}", amount);

        Ok(())
    }
}
