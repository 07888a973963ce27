use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::ledger::{self, Draw};
use crate::state::*;
use crate::utils::TokenCpiVault;

/**
 * Account context for withdrawing unclaimed campaign rewards
 *
 * Returns part or all of a campaign's remaining balance to the account that
 * funded it. Claim records are not touched.
 *
 * Access Control: Campaign owner only (checked by the authorization guard)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct WithdrawReward<'info> {
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

    /// Owner's token account receiving the withdrawn tokens
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = pool_token_mint,
        associated_token::authority = user,
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

    #[account(mut)]
    pub user: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handle_withdraw_reward(
    ctx: Context<WithdrawReward>,
    campaign_id: u64,
    amount: u64,
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
        ctx.accounts.user.to_account_info(),
        None,
    );

    let draw = Draw {
        actor: ctx.accounts.user.key(),
        campaign_id,
        amount,
    };
    let remaining = ledger::withdraw_reward(
        &ctx.accounts.reward_pool,
        &pool_key,
        &mut ctx.accounts.reward_info,
        &draw,
        &mut vault,
    )?;

    if remaining == 0 {
        msg!("Campaign {} closed", campaign_id);
    }

    emit_cpi!(RewardWithdrawn {
        reward_pool: pool_key,
        campaign_id,
        owner: draw.actor,
        amount,
        remaining,
    });

    Ok(())
}
