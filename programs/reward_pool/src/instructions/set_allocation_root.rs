use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::ledger;
use crate::state::*;

/**
 * Account context for publishing a campaign's allocation root
 *
 * The root commits to every (claimer, campaign_id, max_amount) entitlement of
 * the campaign. It can be replaced at any time; claim records keep their
 * cumulative totals across root updates.
 *
 * Access Control: Campaign owner only (checked by the authorization guard)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct SetAllocationRoot<'info> {
    #[account(
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    #[account(
        mut,
        seeds = [REWARD_INFO_SEED.as_bytes(), reward_pool.key().as_ref(), campaign_id.to_le_bytes().as_ref()],
        bump = reward_info.bump
    )]
    pub reward_info: Account<'info, RewardInfo>,

    pub owner: Signer<'info>,
}

pub fn handle_set_allocation_root(
    ctx: Context<SetAllocationRoot>,
    campaign_id: u64,
    allocation_root: [u8; 32],
) -> Result<()> {
    ledger::set_allocation_root(
        &ctx.accounts.reward_pool,
        &mut ctx.accounts.reward_info,
        &ctx.accounts.owner.key(),
        campaign_id,
        allocation_root,
    )?;

    emit_cpi!(AllocationRootSet {
        reward_pool: ctx.accounts.reward_pool.key(),
        campaign_id,
        owner: ctx.accounts.owner.key(),
        allocation_root,
    });

    Ok(())
}
