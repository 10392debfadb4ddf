// Update Yields Instruction
//
// Operator-only. Assigns the next round of locked yield to a batch of
// accounts. For every (account, amount) pair, in input order, the account's
// currently locked yield vests into available yield and `amount` becomes the
// new locked figure. An account listed twice keeps only its last amount.
//
// Position PDAs are passed as remaining accounts in the same order as
// `owners`. Missing positions are created here, paid by the operator.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateYields<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED, ledger.token_mint.as_ref(), ledger.operator.as_ref()],
        bump = ledger.ledger_bump,
    )]
    pub ledger: Account<'info, LedgerConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateYields<'info> {
    pub fn update_yields(
        &mut self,
        owners: Vec<Pubkey>,
        yield_amounts: Vec<u64>,
        positions: &[AccountInfo<'info>],
        program_id: &Pubkey,
    ) -> Result<()> {
        self.ledger.assert_is_operator(&self.operator.key())?;
        require!(
            owners.len() == yield_amounts.len(),
            StakingError::ArraysMismatch
        );
        require!(
            positions.len() == owners.len(),
            StakingError::PositionMismatch
        );

        let now = Clock::get()?.unix_timestamp;
        let ledger_key = self.ledger.key();

        for ((owner, new_amount), info) in owners.iter().zip(yield_amounts).zip(positions) {
            let (expected, bump) = Pubkey::find_program_address(
                &[POSITION_SEED, ledger_key.as_ref(), owner.as_ref()],
                program_id,
            );
            require_keys_eq!(info.key(), expected, StakingError::PositionMismatch);

            if info.data_is_empty() {
                self.create_position(info, owner, bump, program_id)?;
            }
            require_keys_eq!(*info.owner, *program_id, StakingError::PositionMismatch);

            // re-read on every entry so a repeated account sees its earlier update
            let mut position = Position::try_deserialize(&mut &info.try_borrow_data()?[..])?;
            position.assign_yield(new_amount, now)?;
            {
                let mut data = info.try_borrow_mut_data()?;
                position.try_serialize(&mut &mut data[..])?;
            }

            emit!(Yield {
                owner: *owner,
                yield_available: position.yield_available,
                yield_locked: position.yield_locked,
            });
        }

        msg!("Updated yields for {} accounts", owners.len());

        Ok(())
    }

    // mirrors anchor init for remaining accounts
    fn create_position(
        &self,
        info: &AccountInfo<'info>,
        owner: &Pubkey,
        bump: u8,
        program_id: &Pubkey,
    ) -> Result<()> {
        let space = ANCHOR_DISCRIMINATOR + Position::INIT_SPACE;
        let rent = Rent::get()?.minimum_balance(space);

        let ledger_key = self.ledger.key();
        let position_seeds: &[&[u8]] = &[
            POSITION_SEED,
            ledger_key.as_ref(),
            owner.as_ref(),
            &[bump],
        ];
        let signer_seeds = &[position_seeds];

        let system_program = self.system_program.to_account_info();
        let operator = self.operator.to_account_info();
        let current_lamports = info.lamports();

        if current_lamports == 0 {
            create_account(
                CpiContext::new_with_signer(
                    system_program,
                    CreateAccount {
                        from: operator,
                        to: info.clone(),
                    },
                    signer_seeds,
                ),
                rent,
                space as u64,
                program_id,
            )?;
        } else {
            // someone already sent lamports to the PDA, top it up and take it over
            let shortfall = rent.saturating_sub(current_lamports);
            if shortfall > 0 {
                transfer(
                    CpiContext::new(
                        system_program.clone(),
                        Transfer {
                            from: operator,
                            to: info.clone(),
                        },
                    ),
                    shortfall,
                )?;
            }
            allocate(
                CpiContext::new_with_signer(
                    system_program.clone(),
                    Allocate {
                        account_to_allocate: info.clone(),
                    },
                    signer_seeds,
                ),
                space as u64,
            )?;
            assign(
                CpiContext::new_with_signer(
                    system_program,
                    Assign {
                        account_to_assign: info.clone(),
                    },
                    signer_seeds,
                ),
                program_id,
            )?;
        }

        let position = Position {
            owner: *owner,
            bump,
            ..Position::default()
        };
        let mut data = info.try_borrow_mut_data()?;
        position.try_serialize(&mut &mut data[..])?;

        Ok(())
    }
}
