use anchor_lang::prelude::*;

#[event]
pub struct Deposit {
    pub owner: Pubkey,
    pub amount: u64,
    pub locked_until: i64,
}

#[event]
pub struct Add {
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Claim {
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Withdraw {
    pub owner: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Yield {
    pub owner: Pubkey,
    pub yield_available: u64,
    pub yield_locked: u64,
}

#[event]
pub struct RewardsAdded {
    pub amount: u64,
    pub available_rewards: u64,
}

#[event]
pub struct RewardsWithdrawn {
    pub amount: u64,
}
