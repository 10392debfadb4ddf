// Staking Ledger Constants

use anchor_lang::prelude::*;

#[constant]
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const POSITION_SEED: &[u8] = b"position";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

pub const DAY: i64 = 86_400;

// Longest lock a stake may be opened with
pub const MAX_LOCK: i64 = 365 * DAY;
// Shortest lock a stake may be opened with
pub const MIN_LOCK: i64 = 21 * DAY;
// Locked yield vests once this long has passed since its assignment
pub const EPOCH: i64 = 28 * DAY;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
