// Initialize Ledger Instruction
//
// Creates the ledger config for a staking mint together with the vault that
// custodies principal and rewards. The reward pool starts empty.
// Seeds: ["ledger", token_mint, operator], one ledger per operator and mint

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR + LedgerConfig::INIT_SPACE,
        seeds = [LEDGER_SEED, token_mint.key().as_ref(), operator.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: PDA signer for the vault
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, ledger.key().as_ref()],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = operator,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeLedger<'info> {
    pub fn initialize_ledger(&mut self, bumps: &InitializeLedgerBumps) -> Result<()> {
        let operator = self.operator.key();
        self.ledger.set_inner(LedgerConfig {
            operator,
            token_mint: self.token_mint.key(),
            vault: self.vault.key(),
            available_rewards: 0,
            ledger_bump: bumps.ledger,
            vault_authority_bump: bumps.vault_authority,
        });

        msg!("Ledger initialized for mint {} with operator {}", self.token_mint.key(), operator);

        Ok(())
    }
}
