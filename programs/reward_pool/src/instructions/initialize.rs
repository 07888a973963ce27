use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::ledger;
use crate::state::*;
use crate::utils::TokenCpiVault;

/**
 * Account context for creating a reward pool
 *
 * This instruction creates the pool record for a (creator, token_mint) pair
 * and the custody vault that will hold every campaign's tokens.
 *
 * Access Control: Anyone can create a pool; the signer becomes its creator
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The reward pool account (PDA)
    /// - Derived from: ["reward_pool", user, pool_token_mint]
    /// - init_if_needed so a repeated call reports PoolAlreadyInitialized
    #[account(
        init_if_needed,
        payer = user,
        space = RewardPoolState::LEN,
        seeds = [REWARD_POOL_SEED.as_bytes(), user.key().as_ref(), pool_token_mint.key().as_ref()],
        bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    /// The token mint the pool accounts in
    #[account(mint::token_program = token_program)]
    pub pool_token_mint: InterfaceAccount<'info, Mint>,

    /// Custody vault, the pool's associated token account
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = pool_token_mint,
        associated_token::authority = reward_pool,
        associated_token::token_program = token_program,
    )]
    pub pool_token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Creator of the pool, pays for both accounts
    #[account(mut)]
    pub user: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    let pool_key = ctx.accounts.reward_pool.key();
    let mut vault = TokenCpiVault::new(
        ctx.accounts.token_program.to_account_info(),
        ctx.accounts.pool_token_mint.to_account_info(),
        ctx.accounts.pool_token_mint.decimals,
    )
    .with_account(
        &ctx.accounts.pool_token_vault,
        ctx.accounts.reward_pool.to_account_info(),
        None,
    );

    let custody = ledger::initialize_pool(
        &mut ctx.accounts.reward_pool,
        &pool_key,
        ctx.accounts.user.key(),
        ctx.accounts.pool_token_mint.key(),
        ctx.bumps.reward_pool,
        &mut vault,
    )?;

    msg!("Reward pool {} initialized", pool_key);

    emit_cpi!(PoolInitialized {
        reward_pool: pool_key,
        creator: ctx.accounts.user.key(),
        token_mint: ctx.accounts.pool_token_mint.key(),
        pool_token_vault: custody,
    });

    Ok(())
}
