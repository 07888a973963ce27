use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::*;
use crate::ledger::{authorize, EntitlementPolicy, Role, VaultAdapter};
use crate::state::*;

/*
 * Pool state machine
 *
 * Every operation follows the same phases:
 * 1. Pause gate (all but initialize and unpause)
 * 2. Authorization guard
 * 3. Validation and checked arithmetic into locals
 * 4. Vault transfers
 * 5. Commit of the computed values to the records
 *
 * Nothing is written to a record before phase 5, so a failure in any earlier
 * phase leaves every record exactly as it was.
 */

/// Arguments of a campaign deposit
#[derive(Clone, Copy, Debug)]
pub struct DepositTerms {
    pub depositor: Pubkey,
    pub token_address: Pubkey,
    /// Gross amount taken from the depositor
    pub campaign_amount: u64,
    /// Part of campaign_amount routed to the tax recipient
    pub fee_amount: u64,
    pub campaign_id: u64,
}

/// A request to take `amount` out of a campaign, by its owner or a claimer
#[derive(Clone, Copy, Debug)]
pub struct Draw {
    pub actor: Pubkey,
    pub campaign_id: u64,
    pub amount: u64,
}

/// Outcome of a successful claim
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Claimer's cumulative claimed amount after this claim
    pub total_claimed: u64,
    /// Ceiling the claim was checked against
    pub ceiling: u64,
    /// Campaign balance after this claim
    pub remaining: u64,
}

/// Creates the pool record and provisions its custody vault.
///
/// Returns the custody vault account.
pub fn initialize_pool<V: VaultAdapter>(
    pool: &mut RewardPoolState,
    pool_key: &Pubkey,
    creator: Pubkey,
    token_mint: Pubkey,
    bump: u8,
    vault: &mut V,
) -> Result<Pubkey> {
    require!(!pool.is_initialized(), RewardPoolError::PoolAlreadyInitialized);
    require_keys_neq!(creator, Pubkey::default(), RewardPoolError::InvalidAddress);
    require_keys_neq!(token_mint, Pubkey::default(), RewardPoolError::InvalidAddress);

    let custody = vault.associated_account(pool_key, &token_mint)?;

    pool.creator = creator;
    pool.token_mint = token_mint;
    pool.tax_recipient = creator;
    pool.paused = false;
    pool.bump = bump;
    Ok(custody)
}

/// Funds a new campaign.
///
/// The full campaign_amount moves into custody first and the fee is routed
/// out of custody afterwards, so the fee leg is always covered.
/// Returns the net amount credited to the campaign.
pub fn deposit_reward<V: VaultAdapter>(
    pool: &RewardPoolState,
    pool_key: &Pubkey,
    campaign: &mut RewardInfo,
    bump: u8,
    terms: &DepositTerms,
    vault: &mut V,
) -> Result<u64> {
    pool.ensure_active()?;
    require!(terms.campaign_amount > 0, RewardPoolError::InvalidAmount);
    require_keys_neq!(terms.depositor, Pubkey::default(), RewardPoolError::InvalidAddress);
    require_keys_neq!(terms.token_address, Pubkey::default(), RewardPoolError::InvalidAddress);
    let net_amount = terms
        .campaign_amount
        .checked_sub(terms.fee_amount)
        .ok_or(RewardPoolError::ArithmeticError)?;
    require!(!campaign.exists(), RewardPoolError::CampaignAlreadyExists);

    let source = vault.associated_account(&terms.depositor, &pool.token_mint)?;
    let custody = vault.associated_account(pool_key, &pool.token_mint)?;
    vault.transfer(&source, &custody, terms.campaign_amount)?;
    if terms.fee_amount > 0 {
        let tax_account = vault.associated_account(&pool.tax_recipient, &pool.token_mint)?;
        vault.transfer(&custody, &tax_account, terms.fee_amount)?;
    }

    campaign.token_address = terms.token_address;
    campaign.owner_address = terms.depositor;
    campaign.amount = net_amount;
    campaign.campaign_id = terms.campaign_id;
    campaign.allocation_root = EMPTY_ROOT;
    campaign.bump = bump;
    Ok(net_amount)
}

/// Returns unclaimed campaign funds to the campaign owner.
///
/// Returns the campaign balance left after the withdrawal.
pub fn withdraw_reward<V: VaultAdapter>(
    pool: &RewardPoolState,
    pool_key: &Pubkey,
    campaign: &mut RewardInfo,
    draw: &Draw,
    vault: &mut V,
) -> Result<u64> {
    pool.ensure_active()?;
    campaign.ensure_campaign(draw.campaign_id)?;
    authorize(Role::CampaignOwner, &campaign.owner_address, &draw.actor)?;
    require!(draw.amount > 0, RewardPoolError::InvalidAmount);

    let remaining = campaign.remaining_after(draw.amount)?;

    let custody = vault.associated_account(pool_key, &pool.token_mint)?;
    let destination = vault.associated_account(&draw.actor, &pool.token_mint)?;
    vault.transfer(&custody, &destination, draw.amount)?;

    campaign.amount = remaining;
    Ok(remaining)
}

/// Pays part of a campaign to a claimer within the claimer's ceiling.
///
/// `claim` may be a fresh record; it is bound to the claimer on commit.
pub fn claim_reward<V: VaultAdapter, P: EntitlementPolicy>(
    pool: &RewardPoolState,
    pool_key: &Pubkey,
    campaign: &mut RewardInfo,
    claim: &mut UserClaimInfo,
    bump: u8,
    draw: &Draw,
    policy: &P,
    vault: &mut V,
) -> Result<ClaimReceipt> {
    pool.ensure_active()?;
    campaign.ensure_campaign(draw.campaign_id)?;
    if claim.is_initialized() {
        authorize(Role::SelfClaimant, &claim.claimer, &draw.actor)?;
        require!(
            claim.campaign_id == draw.campaign_id,
            RewardPoolError::UnauthorizedCampaignId
        );
    }
    require!(draw.amount > 0, RewardPoolError::InvalidAmount);
    require!(draw.amount <= campaign.amount, RewardPoolError::NotEnoughReward);

    let ceiling = policy.ceiling(draw.campaign_id, &draw.actor)?;
    let total_claimed = claim.total_after(draw.amount, ceiling)?;
    let remaining = campaign.remaining_after(draw.amount)?;

    let custody = vault.associated_account(pool_key, &pool.token_mint)?;
    let destination = vault.associated_account(&draw.actor, &pool.token_mint)?;
    vault.transfer(&custody, &destination, draw.amount)?;

    if !claim.is_initialized() {
        claim.claimer = draw.actor;
        claim.campaign_id = draw.campaign_id;
        claim.bump = bump;
    }
    claim.claimed_amount = total_claimed;
    campaign.amount = remaining;

    Ok(ClaimReceipt {
        total_claimed,
        ceiling,
        remaining,
    })
}

/// Cumulative amount `claimer` has taken from a campaign, zero without a record
pub fn claimed_amount(
    pool: &RewardPoolState,
    claim: Option<&UserClaimInfo>,
    claimer: &Pubkey,
    campaign_id: u64,
) -> Result<u64> {
    pool.ensure_active()?;
    match claim {
        Some(record) if record.is_initialized() => {
            authorize(Role::SelfClaimant, &record.claimer, claimer)?;
            require!(
                record.campaign_id == campaign_id,
                RewardPoolError::UnauthorizedCampaignId
            );
            Ok(record.claimed_amount)
        }
        _ => Ok(0),
    }
}

/// Points deposit fees at a new recipient; returns the previous one.
///
/// The pool itself is refused: its fee account would be the custody vault,
/// leaving fees in custody outside every campaign balance.
pub fn set_tax_recipient(
    pool: &mut RewardPoolState,
    pool_key: &Pubkey,
    creator: &Pubkey,
    new_tax_recipient: Pubkey,
) -> Result<Pubkey> {
    pool.ensure_active()?;
    authorize(Role::PoolCreator, &pool.creator, creator)?;
    require_keys_neq!(new_tax_recipient, Pubkey::default(), RewardPoolError::InvalidAddress);
    require_keys_neq!(new_tax_recipient, *pool_key, RewardPoolError::InvalidAddress);

    let previous = pool.tax_recipient;
    pool.tax_recipient = new_tax_recipient;
    Ok(previous)
}

pub fn pause(pool: &mut RewardPoolState, creator: &Pubkey) -> Result<()> {
    pool.ensure_active()?;
    authorize(Role::PoolCreator, &pool.creator, creator)?;
    pool.paused = true;
    Ok(())
}

/// The only operation accepted while the pool is paused
pub fn unpause(pool: &mut RewardPoolState, creator: &Pubkey) -> Result<()> {
    authorize(Role::PoolCreator, &pool.creator, creator)?;
    pool.paused = false;
    Ok(())
}

/// Publishes the merkle root claimers prove their ceilings against
pub fn set_allocation_root(
    pool: &RewardPoolState,
    campaign: &mut RewardInfo,
    owner: &Pubkey,
    campaign_id: u64,
    allocation_root: [u8; 32],
) -> Result<()> {
    pool.ensure_active()?;
    campaign.ensure_campaign(campaign_id)?;
    authorize(Role::CampaignOwner, &campaign.owner_address, owner)?;
    require!(
        allocation_root != EMPTY_ROOT,
        RewardPoolError::InvalidAllocationRoot
    );

    campaign.allocation_root = allocation_root;
    Ok(())
}
