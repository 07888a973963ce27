use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::ledger;
use crate::state::*;

/**
 * Account context for changing the fee destination
 *
 * Access Control: Pool creator only (checked by the authorization guard)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetTaxRecipient<'info> {
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    pub creator: Signer<'info>,
}

pub fn handle_set_tax_recipient(ctx: Context<SetTaxRecipient>, new_tax_recipient: Pubkey) -> Result<()> {
    let pool_key = ctx.accounts.reward_pool.key();
    let previous_tax_recipient = ledger::set_tax_recipient(
        &mut ctx.accounts.reward_pool,
        &pool_key,
        &ctx.accounts.creator.key(),
        new_tax_recipient,
    )?;

    emit_cpi!(TaxRecipientUpdated {
        reward_pool: pool_key,
        previous_tax_recipient,
        new_tax_recipient,
    });

    Ok(())
}
