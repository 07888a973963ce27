use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::ledger::{self, Draw, MerkleAllowance};
use crate::state::*;
use crate::utils::TokenCpiVault;

/**
 * Account context for claiming campaign rewards
 *
 * The claimer proves an entitlement ceiling against the campaign's allocation
 * root and takes any amount that keeps their cumulative claim within it.
 *
 * Access Control: The claimer signs and can only ever touch their own
 * claim record (enforced by PDA seeds and the authorization guard)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct ClaimReward<'info> {
    /// The pool's token mint
    #[account(
        mint::token_program = token_program,
        constraint = pool_token_mint.key() == reward_pool.token_mint @ RewardPoolError::TokenMintMismatch
    )]
    pub pool_token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    /// Claimer's token account receiving the reward
    #[account(
        init_if_needed,
        payer = claimer,
        associated_token::mint = pool_token_mint,
        associated_token::authority = claimer,
        associated_token::token_program = token_program,
    )]
    pub user_vault: InterfaceAccount<'info, TokenAccount>,

    /// Pool custody vault
    #[account(
        mut,
        associated_token::mint = pool_token_mint,
        associated_token::authority = reward_pool,
        associated_token::token_program = token_program,
    )]
    pub campaign_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Campaign record
    /// - Derived from: ["reward_info", reward_pool, campaign_id]
    #[account(
        mut,
        seeds = [REWARD_INFO_SEED.as_bytes(), reward_pool.key().as_ref(), campaign_id.to_le_bytes().as_ref()],
        bump = reward_info.bump
    )]
    pub reward_info: Account<'info, RewardInfo>,

    /// Claim record for this claimer and campaign
    /// - Derived from: ["user_claim_info", reward_pool, claimer, campaign_id]
    /// - Created on first claim
    #[account(
        init_if_needed,
        payer = claimer,
        space = UserClaimInfo::LEN,
        seeds = [
            USER_CLAIM_INFO_SEED.as_bytes(),
            reward_pool.key().as_ref(),
            claimer.key().as_ref(),
            campaign_id.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub user_claim_info: Account<'info, UserClaimInfo>,

    #[account(mut)]
    pub claimer: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim against a campaign
 *
 * @param campaign_id - Campaign to claim from
 * @param amount - Amount to take in this transaction
 * @param max_amount - Claimer's ceiling as published in the allocation tree
 * @param proof - Merkle proof for (claimer, campaign_id, max_amount)
 *
 * An invalid proof yields a zero ceiling, so the claim fails with
 * ClaimAmountExceedsAllowedBalance.
 */
pub fn handle_claim_reward(
    ctx: Context<ClaimReward>,
    campaign_id: u64,
    amount: u64,
    max_amount: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let pool_key = ctx.accounts.reward_pool.key();
    let creator = ctx.accounts.reward_pool.creator;
    let token_mint = ctx.accounts.reward_pool.token_mint;
    let bump = [ctx.accounts.reward_pool.bump];
    let seeds: &[&[u8]] = &[
        REWARD_POOL_SEED.as_bytes(),
        creator.as_ref(),
        token_mint.as_ref(),
        &bump,
    ];
    let signer: &[&[&[u8]]] = &[seeds];

    let mut vault = TokenCpiVault::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.pool_token_mint.to_account_info(),
        ctx.accounts.pool_token_mint.decimals,
    )
    .with_account(
        &ctx.accounts.campaign_token_account,
        ctx.accounts.reward_pool.to_account_info(),
        Some(signer),
    )
    .with_account(
        &ctx.accounts.user_vault,
        ctx.accounts.claimer.to_account_info(),
        None,
    );

    let policy = MerkleAllowance::new(ctx.accounts.reward_info.allocation_root, max_amount, &proof);
    let draw = Draw {
        actor: ctx.accounts.claimer.key(),
        campaign_id,
        amount,
    };
    let receipt = ledger::claim_reward(
        &ctx.accounts.reward_pool,
        &pool_key,
        &mut ctx.accounts.reward_info,
        &mut ctx.accounts.user_claim_info,
        ctx.bumps.user_claim_info,
        &draw,
        &policy,
        &mut vault,
    )?;

    emit_cpi!(RewardClaimed {
        reward_pool: pool_key,
        campaign_id,
        claimer: draw.actor,
        amount,
        total_claimed: receipt.total_claimed,
        ceiling: receipt.ceiling,
        remaining: receipt.remaining,
    });

    Ok(())
}
