// Add Rewards Instruction
//
// Operator-only. Funds the reward pool from the operator's token account.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddRewards<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

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

impl<'info> AddRewards<'info> {
    pub fn add_rewards(&mut self, amount: u64) -> Result<()> {
        self.ledger.assert_is_operator(&self.operator.key())?;

        let available_rewards = self.ledger.credit_rewards(amount)?;

        transfer_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.operator_token_account.to_account_info(),
            &self.vault.to_account_info(),
            &self.operator.to_account_info(),
        )?;

        emit!(RewardsAdded {
            amount,
            available_rewards,
        });
        msg!("Reward pool funded with {}, now {}", amount, available_rewards);

        Ok(())
    }
}
