use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Campaign reward record
 *
 * Tracks the balance a depositor funded under one campaign id. Claims and
 * owner withdrawals draw it down; a campaign at zero stays on chain as a
 * closed book and rejects further draws with NotEnoughReward.
 *
 * Derivation: ["reward_info", reward_pool, campaign_id]
 *
 * Design Notes:
 * - A campaign id is funded at most once per pool
 * - owner_address == Pubkey::default() means the record was never funded
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RewardInfo {
    /// Reward token recorded at deposit time
    pub token_address: Pubkey,

    /// Depositor who funded the campaign
    /// - Only this account may withdraw or publish an allocation root
    pub owner_address: Pubkey,

    /// Remaining reward, net of the deposit fee
    pub amount: u64,

    /// Campaign identifier, duplicated from the PDA seeds
    pub campaign_id: u64,

    /// Merkle root over (claimer, campaign_id, max_amount) leaves
    /// - All zeros until the owner publishes one
    pub allocation_root: [u8; 32],

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl RewardInfo {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RewardInfo>();

    /// Derive the campaign record address under a pool
    pub fn address(reward_pool: &Pubkey, campaign_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                REWARD_INFO_SEED.as_bytes(),
                reward_pool.as_ref(),
                campaign_id.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn exists(&self) -> bool {
        self.owner_address != Pubkey::default()
    }

    pub fn is_closed(&self) -> bool {
        self.amount == 0
    }

    pub fn has_allocation(&self) -> bool {
        self.allocation_root != EMPTY_ROOT
    }

    /// Ensures the record is a funded campaign stored under `campaign_id`
    pub fn ensure_campaign(&self, campaign_id: u64) -> Result<()> {
        require!(
            self.exists() && self.campaign_id == campaign_id,
            RewardPoolError::UnauthorizedCampaignId
        );
        Ok(())
    }

    /// Balance left after drawing `amount`, without touching the record
    pub fn remaining_after(&self, amount: u64) -> Result<u64> {
        require!(amount <= self.amount, RewardPoolError::NotEnoughReward);
        let remaining = self
            .amount
            .checked_sub(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        Ok(remaining)
    }
}
