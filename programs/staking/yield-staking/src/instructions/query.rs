// Query Instructions
//
// Read-only views returned through program return data. A position that has
// never been created reads as all zeros.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct GetPosition<'info> {
    /// CHECK: any account may be looked up
    pub owner: UncheckedAccount<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    /// CHECK: may not exist yet, only deserialized when owned by this program
    #[account(
        seeds = [POSITION_SEED, ledger.key().as_ref(), owner.key().as_ref()],
        bump,
    )]
    pub position: UncheckedAccount<'info>,
}

impl<'info> GetPosition<'info> {
    pub fn get_position(&self) -> Result<PositionView> {
        if self.position.data_is_empty() {
            return Ok(PositionView::default());
        }
        require_keys_eq!(*self.position.owner, crate::ID, StakingError::PositionMismatch);

        let data = self.position.try_borrow_data()?;
        let position = Position::try_deserialize(&mut &data[..])?;
        Ok(position.view())
    }
}

#[derive(Accounts)]
pub struct GetLedger<'info> {
    #[account(
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,
}

impl<'info> GetLedger<'info> {
    pub fn get_ledger(&self) -> Result<LedgerView> {
        Ok(self.ledger.view())
    }
}
