use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::ledger;
use crate::state::*;

/**
 * Account context for reading a claimer's cumulative claim
 *
 * Read-only. The claim record may not exist yet, in which case the claimed
 * amount is zero.
 *
 * Access Control: Claimer only (the record address is derived from the signer)
 */
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct GetClaimedAmount<'info> {
    #[account(
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    /// Claim record for this claimer and campaign
    /// CHECK: Either uninitialized or a UserClaimInfo owned by this program
    #[account(
        seeds = [
            USER_CLAIM_INFO_SEED.as_bytes(),
            reward_pool.key().as_ref(),
            claimer.key().as_ref(),
            campaign_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub user_claim_info: UncheckedAccount<'info>,

    pub claimer: Signer<'info>,
}

pub fn handle_get_claimed_amount(ctx: Context<GetClaimedAmount>, campaign_id: u64) -> Result<u64> {
    let claim_account = &ctx.accounts.user_claim_info;

    // Only deserialize when the record has been created
    let record = if claim_account.data_is_empty() {
        None
    } else {
        require_keys_eq!(*claim_account.owner, crate::ID, RewardPoolError::InvalidAddress);
        let data = claim_account.try_borrow_data()?;
        Some(UserClaimInfo::try_deserialize(&mut data.as_ref())?)
    };

    ledger::claimed_amount(
        &ctx.accounts.reward_pool,
        record.as_ref(),
        &ctx.accounts.claimer.key(),
        campaign_id,
    )
}
