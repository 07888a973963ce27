use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::ledger::{self, DepositTerms};
use crate::state::*;
use crate::utils::TokenCpiVault;

/**
 * Account context for funding a campaign
 *
 * The depositor moves campaign_amount into the pool vault; the fee part is
 * routed on to the tax recipient and the rest is recorded on a new campaign
 * owned by the depositor.
 *
 * Access Control: Any signer; the signer becomes the campaign owner
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(token_address: Pubkey, campaign_amount: u64, fee_amount: u64, campaign_id: u64)]
pub struct DepositReward<'info> {
    /// The pool's token mint
    #[account(
        mint::token_program = token_program,
        constraint = pool_token_mint.key() == reward_pool.token_mint @ RewardPoolError::TokenMintMismatch
    )]
    pub pool_token_mint: InterfaceAccount<'info, Mint>,

    /// The reward pool receiving the campaign
    #[account(
        seeds = [REWARD_POOL_SEED.as_bytes(), reward_pool.creator.as_ref(), reward_pool.token_mint.as_ref()],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPoolState>,

    /// Depositor's token account (source of campaign_amount)
    #[account(
        mut,
        associated_token::mint = pool_token_mint,
        associated_token::authority = depositor,
        associated_token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Pool custody vault
    #[account(
        mut,
        associated_token::mint = pool_token_mint,
        associated_token::authority = reward_pool,
        associated_token::token_program = token_program,
    )]
    pub campaign_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Tax recipient's associated token account, created on demand
    /// CHECK: Address is verified by the vault adapter against reward_pool.tax_recipient
    #[account(mut)]
    pub tax_recipient_token_account: UncheckedAccount<'info>,

    /// CHECK: Must match the tax recipient stored on the pool
    #[account(address = reward_pool.tax_recipient @ RewardPoolError::InvalidAddress)]
    pub tax_recipient: UncheckedAccount<'info>,

    /// Campaign record
    /// - Derived from: ["reward_info", reward_pool, campaign_id]
    /// - init_if_needed so a funded id reports CampaignAlreadyExists
    #[account(
        init_if_needed,
        payer = depositor,
        space = RewardInfo::LEN,
        seeds = [REWARD_INFO_SEED.as_bytes(), reward_pool.key().as_ref(), campaign_id.to_le_bytes().as_ref()],
        bump
    )]
    pub reward_info: Account<'info, RewardInfo>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn handle_deposit_reward(
    ctx: Context<DepositReward>,
    token_address: Pubkey,
    campaign_amount: u64,
    fee_amount: u64,
    campaign_id: u64,
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
        &ctx.accounts.depositor_token_account,
        ctx.accounts.depositor.to_account_info(),
        None,
    )
    .with_account(
        &ctx.accounts.campaign_token_account,
        ctx.accounts.reward_pool.to_account_info(),
        Some(signer),
    )
    .with_destination(
        ctx.accounts.tax_recipient_token_account.to_account_info(),
        ctx.accounts.tax_recipient.to_account_info(),
    )
    .with_funding(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        ctx.accounts.associated_token_program.to_account_info(),
    );

    let terms = DepositTerms {
        depositor: ctx.accounts.depositor.key(),
        token_address,
        campaign_amount,
        fee_amount,
        campaign_id,
    };
    let net_amount = ledger::deposit_reward(
        &ctx.accounts.reward_pool,
        &pool_key,
        &mut ctx.accounts.reward_info,
        ctx.bumps.reward_info,
        &terms,
        &mut vault,
    )?;

    emit_cpi!(RewardDeposited {
        reward_pool: pool_key,
        campaign_id,
        depositor: terms.depositor,
        token_address,
        campaign_amount,
        fee_amount,
        tax_recipient: ctx.accounts.reward_pool.tax_recipient,
        net_amount,
    });

    Ok(())
}
