use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::ledger;
use crate::state::*;

/**
 * Account context shared by pause and unpause
 *
 * Pausing rejects every instruction except unpause until the creator
 * lifts it.
 *
 * Access Control: Pool creator only (checked by the authorization guard)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    pub creator: Signer<'info>,
}

pub fn handle_pause(ctx: Context<SetPause>) -> Result<()> {
    let pool_key = ctx.accounts.reward_pool.key();
    ledger::pause(&mut ctx.accounts.reward_pool, &ctx.accounts.creator.key())?;

    msg!("Reward pool {} paused", pool_key);

    emit_cpi!(PoolPaused {
        reward_pool: pool_key,
        creator: ctx.accounts.creator.key(),
    });

    Ok(())
}

pub fn handle_unpause(ctx: Context<SetPause>) -> Result<()> {
    let pool_key = ctx.accounts.reward_pool.key();
    ledger::unpause(&mut ctx.accounts.reward_pool, &ctx.accounts.creator.key())?;

    msg!("Reward pool {} unpaused", pool_key);

    emit_cpi!(PoolUnpaused {
        reward_pool: pool_key,
        creator: ctx.accounts.creator.key(),
    });

    Ok(())
}
