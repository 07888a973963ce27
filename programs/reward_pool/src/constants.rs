use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds for every record the reward pool keeps. Records are addressed
 * deterministically from their key tuple so that clients can derive them
 * without reading chain state first.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for reward pool PDA derivation
/// - Used in: ["reward_pool", creator, token_mint]
/// - One pool per (creator, token) pair
pub const REWARD_POOL_SEED: &str = "reward_pool";

/// Seed for campaign reward record PDA derivation
/// - Used in: ["reward_info", reward_pool, campaign_id]
/// - campaign_id is encoded little-endian
pub const REWARD_INFO_SEED: &str = "reward_info";

/// Seed for per-claimant claim record PDA derivation
/// - Used in: ["user_claim_info", reward_pool, claimer, campaign_id]
/// - Tracks the cumulative amount a claimer has taken from one campaign
pub const USER_CLAIM_INFO_SEED: &str = "user_claim_info";

/// Empty merkle root, marks a campaign without a published allocation
pub const EMPTY_ROOT: [u8; 32] = [0; 32];
