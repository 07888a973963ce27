use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Per-claimant claim record
 *
 * Cumulative amount one claimer has taken from one campaign. The running
 * total only grows and is capped by the claimer's entitlement ceiling.
 *
 * Derivation: ["user_claim_info", reward_pool, claimer, campaign_id]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed)
 * 2. Incremented with each subsequent claim
 * 3. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct UserClaimInfo {
    /// Total amount claimed by this claimer (cumulative)
    pub claimed_amount: u64,

    /// Campaign this record tracks
    pub campaign_id: u64,

    /// Owner of the record, set on first claim
    pub claimer: Pubkey,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl UserClaimInfo {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<UserClaimInfo>();

    /// Derive the claim record address for a claimer under a pool
    pub fn address(reward_pool: &Pubkey, claimer: &Pubkey, campaign_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                USER_CLAIM_INFO_SEED.as_bytes(),
                reward_pool.as_ref(),
                claimer.as_ref(),
                campaign_id.to_le_bytes().as_ref(),
            ],
            &crate::ID,
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.claimer != Pubkey::default()
    }

    /// Running total after claiming `amount`, capped by `ceiling`
    pub fn total_after(&self, amount: u64, ceiling: u64) -> Result<u64> {
        let total = self
            .claimed_amount
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        require!(
            total <= ceiling,
            RewardPoolError::ClaimAmountExceedsAllowedBalance
        );
        Ok(total)
    }
}
