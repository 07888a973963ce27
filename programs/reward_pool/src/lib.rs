use anchor_lang::prelude::*;

declare_id!("B8acWZjXkZUwtfLwsCxcRUk8yGJA51kG5WosFQKQJupU");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Reward Pool Program
 *
 * A Solana program for campaign-based reward distribution. Depositors fund
 * campaigns inside a creator's pool; claimers draw from a campaign up to an
 * individually tracked ceiling; campaign owners take back what is left.
 *
 * Key Features:
 * - One pool per (creator, token mint), with a single custody vault
 * - Campaigns keyed by a depositor-chosen id, funded once, net of a deposit fee
 * - Cumulative per-claimer claim tracking capped by a merkle-proven ceiling
 * - Global pause switch and tax recipient controlled by the pool creator
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Reward Pool PDA: creator, token mint, tax recipient, paused flag
 * - Pool Vault: associated token account of the pool PDA
 * - Reward Info PDAs: per-campaign balance and owner
 * - User Claim Info PDAs: per-(claimer, campaign) cumulative claimed amount
 *
 * Workflow:
 * 1. Creator initializes the pool
 * 2. Depositors fund campaigns; the fee goes to the tax recipient
 * 3. Campaign owners publish an allocation root
 * 4. Claimers claim with merkle proofs of their ceiling
 * 5. Campaign owners withdraw whatever remains unclaimed
 */
#[program]
pub mod reward_pool {
    use super::*;

    /**
     * Creates a reward pool for the signer and the given token mint
     *
     * The signer becomes the creator and the initial tax recipient. The
     * pool's custody vault is created alongside.
     *
     * Access Control: Any signer
     */
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handle_initialize(ctx)
    }

    /**
     * Funds a new campaign
     *
     * @param token_address - Reward token recorded on the campaign
     * @param campaign_amount - Gross amount taken from the depositor
     * @param fee_amount - Part of campaign_amount routed to the tax recipient
     * @param campaign_id - Campaign identifier, unique within the pool
     *
     * Access Control: Any signer; becomes the campaign owner
     */
    pub fn deposit_reward(
        ctx: Context<DepositReward>,
        token_address: Pubkey,
        campaign_amount: u64,
        fee_amount: u64,
        campaign_id: u64,
    ) -> Result<()> {
        handle_deposit_reward(ctx, token_address, campaign_amount, fee_amount, campaign_id)
    }

    /**
     * Returns unclaimed campaign funds to the campaign owner
     *
     * Access Control: Campaign owner only
     */
    pub fn withdraw_reward(ctx: Context<WithdrawReward>, campaign_id: u64, amount: u64) -> Result<()> {
        handle_withdraw_reward(ctx, campaign_id, amount)
    }

    /**
     * Claims part of a campaign
     *
     * @param campaign_id - Campaign to claim from
     * @param amount - Amount to take in this transaction
     * @param max_amount - Claimer's ceiling from the allocation tree
     * @param proof - Merkle proof of (claimer, campaign_id, max_amount)
     *
     * Access Control: Any claimer with a valid proof, on their own record only
     */
    pub fn claim_reward(
        ctx: Context<ClaimReward>,
        campaign_id: u64,
        amount: u64,
        max_amount: u64,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        handle_claim_reward(ctx, campaign_id, amount, max_amount, proof)
    }

    /**
     * Returns the signer's cumulative claimed amount for a campaign
     *
     * Access Control: Claimer only
     */
    pub fn get_claimed_amount(ctx: Context<GetClaimedAmount>, campaign_id: u64) -> Result<u64> {
        handle_get_claimed_amount(ctx, campaign_id)
    }

    /**
     * Changes the account that receives deposit fees
     *
     * Access Control: Pool creator only
     */
    pub fn set_tax_recipient(ctx: Context<SetTaxRecipient>, new_tax_recipient: Pubkey) -> Result<()> {
        handle_set_tax_recipient(ctx, new_tax_recipient)
    }

    /**
     * Pauses the pool
     *
     * Access Control: Pool creator only
     */
    pub fn pause(ctx: Context<SetPause>) -> Result<()> {
        handle_pause(ctx)
    }

    /**
     * Unpauses the pool; the only instruction accepted while paused
     *
     * Access Control: Pool creator only
     */
    pub fn unpause(ctx: Context<SetPause>) -> Result<()> {
        handle_unpause(ctx)
    }

    /**
     * Publishes the merkle root claimers prove their ceilings against
     *
     * @param campaign_id - Campaign the root applies to
     * @param allocation_root - Root over (claimer, campaign_id, max_amount) leaves
     *
     * Access Control: Campaign owner only
     */
    pub fn set_allocation_root(
        ctx: Context<SetAllocationRoot>,
        campaign_id: u64,
        allocation_root: [u8; 32],
    ) -> Result<()> {
        handle_set_allocation_root(ctx, campaign_id, allocation_root)
    }
}
