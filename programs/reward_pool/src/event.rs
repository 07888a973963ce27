use anchor_lang::prelude::*;

/// Event emitted when a reward pool is created
#[event]
pub struct PoolInitialized {
    /// The reward pool account public key
    pub reward_pool: Pubkey,
    /// Creator who administers the pool
    pub creator: Pubkey,
    /// Token mint the pool accounts in
    pub token_mint: Pubkey,
    /// Custody token account holding the pool's tokens
    pub pool_token_vault: Pubkey,
}

/// Event emitted when a campaign is funded
#[event]
pub struct RewardDeposited {
    /// The reward pool account public key
    pub reward_pool: Pubkey,
    /// Campaign identifier chosen by the depositor
    pub campaign_id: u64,
    /// Depositor, recorded as the campaign owner
    pub depositor: Pubkey,
    /// Reward token recorded on the campaign
    pub token_address: Pubkey,
    /// Gross amount taken from the depositor
    pub campaign_amount: u64,
    /// Fee routed to the tax recipient
    pub fee_amount: u64,
    /// Tax recipient at the time of the deposit
    pub tax_recipient: Pubkey,
    /// Amount credited to the campaign (campaign_amount - fee_amount)
    pub net_amount: u64,
}

/// Event emitted when a campaign owner takes back unclaimed rewards
#[event]
pub struct RewardWithdrawn {
    pub reward_pool: Pubkey,
    pub campaign_id: u64,
    /// Campaign owner receiving the tokens
    pub owner: Pubkey,
    pub amount: u64,
    /// Campaign balance after the withdrawal
    pub remaining: u64,
}

/// Event emitted when a claimer takes part of a campaign
#[event]
pub struct RewardClaimed {
    pub reward_pool: Pubkey,
    pub campaign_id: u64,
    pub claimer: Pubkey,
    /// Amount claimed in this transaction
    pub amount: u64,
    /// Cumulative amount claimed by this claimer on this campaign
    pub total_claimed: u64,
    /// Entitlement ceiling the claim was checked against
    pub ceiling: u64,
    /// Campaign balance after the claim
    pub remaining: u64,
}

/// Event emitted when the pool creator changes the fee destination
#[event]
pub struct TaxRecipientUpdated {
    pub reward_pool: Pubkey,
    pub previous_tax_recipient: Pubkey,
    pub new_tax_recipient: Pubkey,
}

/// Event emitted when the pool is paused
#[event]
pub struct PoolPaused {
    pub reward_pool: Pubkey,
    pub creator: Pubkey,
}

/// Event emitted when the pool is unpaused
#[event]
pub struct PoolUnpaused {
    pub reward_pool: Pubkey,
    pub creator: Pubkey,
}

/// Event emitted when a campaign owner publishes an allocation root
#[event]
pub struct AllocationRootSet {
    pub reward_pool: Pubkey,
    pub campaign_id: u64,
    pub owner: Pubkey,
    /// Merkle root over (claimer, campaign_id, max_amount) leaves
    pub allocation_root: [u8; 32],
}
