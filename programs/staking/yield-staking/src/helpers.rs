// Staking Helper Functions
//
// Token CPI helpers shared by the staking and pool instructions. All custody
// moves go through the SPL Token program, which fails the whole transaction
// when the source balance is short.

use anchor_lang::prelude::*;
use anchor_spl::token::{Transfer, transfer};

use crate::constants::*;

// Transfer tokens from a signer-owned account into the vault
pub fn transfer_to_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: vault.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer tokens out of the vault, signed by the vault authority PDA
// Seeds: ["vault_authority", ledger]
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    vault_authority: &AccountInfo<'info>,
    ledger: &Pubkey,
    vault_authority_bump: u8,
) -> Result<()> {
    let authority_seeds: &[&[u8]] = &[
        VAULT_AUTHORITY_SEED,
        ledger.as_ref(),
        &[vault_authority_bump],
    ];
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: to.clone(),
                authority: vault_authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
