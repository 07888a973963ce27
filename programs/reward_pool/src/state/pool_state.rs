use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/**
 * Reward pool root state
 *
 * One pool exists per (creator, token_mint) pair. The pool owns the custody
 * vault (the associated token account of this PDA) and carries the settings
 * every other instruction is gated on.
 *
 * Derivation: ["reward_pool", creator, token_mint]
 *
 * Lifecycle:
 * 1. Created during initialize
 * 2. tax_recipient updated by set_tax_recipient
 * 3. paused toggled by pause / unpause
 * 4. Never closed
 */
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RewardPoolState {
    /// Administrator of the pool
    /// - Immutable after initialize
    pub creator: Pubkey,

    /// Token mint every balance of this pool is denominated in
    pub token_mint: Pubkey,

    /// Receives the fee portion of each deposit
    /// - Defaults to the creator
    pub tax_recipient: Pubkey,

    /// While set, every instruction except unpause is rejected
    pub paused: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl RewardPoolState {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<RewardPoolState>();

    /// Derive the pool address for a (creator, token_mint) pair
    pub fn address(creator: &Pubkey, token_mint: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[REWARD_POOL_SEED.as_bytes(), creator.as_ref(), token_mint.as_ref()],
            &crate::ID,
        )
    }

    pub fn is_initialized(&self) -> bool {
        self.creator != Pubkey::default()
    }

    /// Rejects the call when the pool is paused
    pub fn ensure_active(&self) -> Result<()> {
        require!(!self.paused, RewardPoolError::ProgramPaused);
        Ok(())
    }
}
