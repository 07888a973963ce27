use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anchor_lang::prelude::*;

use crate::error::*;
use crate::ledger::machine::{self, ClaimReceipt, DepositTerms, Draw};
use crate::ledger::{EntitlementPolicy, VaultAdapter};
use crate::state::*;

/// Pool record together with its derived address
#[derive(Default, Debug)]
struct PoolSlot {
    key: Pubkey,
    state: RewardPoolState,
}

/// A campaign and every claim record drawn against it
#[derive(Default, Debug)]
struct CampaignSlot {
    info: RewardInfo,
    claims: HashMap<Pubkey, UserClaimInfo>,
}

/// In-memory reward pool that is safe to drive from many threads.
///
/// Lock order is pool, campaign table, campaign, vault. Ordinary operations
/// hold the pool lock shared, so pause and unpause wait for in-flight
/// operations to finish. Each campaign sits behind its own mutex; operations
/// on different campaigns only meet briefly at the vault lock.
pub struct RewardBook<V: VaultAdapter> {
    pool: RwLock<PoolSlot>,
    campaigns: RwLock<HashMap<u64, Arc<Mutex<CampaignSlot>>>>,
    vault: Mutex<V>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<V: VaultAdapter> RewardBook<V> {
    /// Empty book over `vault`; call `initialize` before anything else
    pub fn new(vault: V) -> Self {
        Self {
            pool: RwLock::new(PoolSlot::default()),
            campaigns: RwLock::new(HashMap::new()),
            vault: Mutex::new(vault),
        }
    }

    /// Creates the pool for (creator, token_mint) and returns its custody account
    pub fn initialize(&self, creator: Pubkey, token_mint: Pubkey) -> Result<Pubkey> {
        let mut pool = write(&self.pool);
        let (key, bump) = RewardPoolState::address(&creator, &token_mint);
        let mut vault = lock(&self.vault);
        let custody = machine::initialize_pool(&mut pool.state, &key, creator, token_mint, bump, &mut *vault)?;
        pool.key = key;
        Ok(custody)
    }

    pub fn deposit_reward(&self, terms: &DepositTerms) -> Result<u64> {
        let pool = read(&self.pool);
        let mut campaigns = write(&self.campaigns);
        // An existing campaign is handed to the state machine so it reports
        // the same error ordering as on chain.
        let mut info = match campaigns.get(&terms.campaign_id) {
            Some(slot) => lock(slot).info.clone(),
            None => RewardInfo::default(),
        };

        let (_, bump) = RewardInfo::address(&pool.key, terms.campaign_id);
        let net_amount = {
            let mut vault = lock(&self.vault);
            machine::deposit_reward(&pool.state, &pool.key, &mut info, bump, terms, &mut *vault)?
        };

        campaigns.insert(
            terms.campaign_id,
            Arc::new(Mutex::new(CampaignSlot {
                info,
                claims: HashMap::new(),
            })),
        );
        Ok(net_amount)
    }

    pub fn withdraw_reward(&self, draw: &Draw) -> Result<u64> {
        let pool = read(&self.pool);
        pool.state.ensure_active()?;
        let slot = self.campaign_slot(draw.campaign_id)?;
        let mut slot = lock(&slot);
        let mut vault = lock(&self.vault);
        machine::withdraw_reward(&pool.state, &pool.key, &mut slot.info, draw, &mut *vault)
    }

    pub fn claim_reward<P: EntitlementPolicy>(&self, draw: &Draw, policy: &P) -> Result<ClaimReceipt> {
        let pool = read(&self.pool);
        pool.state.ensure_active()?;
        let slot = self.campaign_slot(draw.campaign_id)?;
        let mut slot = lock(&slot);
        let CampaignSlot { info, claims } = &mut *slot;

        let (_, bump) = UserClaimInfo::address(&pool.key, &draw.actor, draw.campaign_id);
        let mut record = claims.get(&draw.actor).cloned().unwrap_or_default();
        let receipt = {
            let mut vault = lock(&self.vault);
            machine::claim_reward(&pool.state, &pool.key, info, &mut record, bump, draw, policy, &mut *vault)?
        };
        claims.insert(draw.actor, record);
        Ok(receipt)
    }

    pub fn claimed_amount(&self, claimer: &Pubkey, campaign_id: u64) -> Result<u64> {
        let pool = read(&self.pool);
        let slot = match read(&self.campaigns).get(&campaign_id) {
            Some(slot) => Arc::clone(slot),
            None => return machine::claimed_amount(&pool.state, None, claimer, campaign_id),
        };
        let slot = lock(&slot);
        machine::claimed_amount(&pool.state, slot.claims.get(claimer), claimer, campaign_id)
    }

    pub fn set_tax_recipient(&self, creator: &Pubkey, new_tax_recipient: Pubkey) -> Result<Pubkey> {
        let mut pool = write(&self.pool);
        let pool_key = pool.key;
        machine::set_tax_recipient(&mut pool.state, &pool_key, creator, new_tax_recipient)
    }

    pub fn pause(&self, creator: &Pubkey) -> Result<()> {
        let mut pool = write(&self.pool);
        machine::pause(&mut pool.state, creator)
    }

    pub fn unpause(&self, creator: &Pubkey) -> Result<()> {
        let mut pool = write(&self.pool);
        machine::unpause(&mut pool.state, creator)
    }

    pub fn set_allocation_root(&self, owner: &Pubkey, campaign_id: u64, allocation_root: [u8; 32]) -> Result<()> {
        let pool = read(&self.pool);
        pool.state.ensure_active()?;
        let slot = self.campaign_slot(campaign_id)?;
        let mut slot = lock(&slot);
        machine::set_allocation_root(&pool.state, &mut slot.info, owner, campaign_id, allocation_root)
    }

    /// Address of the pool record
    pub fn key(&self) -> Pubkey {
        read(&self.pool).key
    }

    /// Snapshot of the pool record
    pub fn pool(&self) -> RewardPoolState {
        read(&self.pool).state.clone()
    }

    /// Snapshot of a campaign record
    pub fn campaign(&self, campaign_id: u64) -> Option<RewardInfo> {
        let slot = read(&self.campaigns).get(&campaign_id).map(Arc::clone)?;
        let info = lock(&slot).info.clone();
        Some(info)
    }

    /// Snapshot of a claim record
    pub fn claim_record(&self, claimer: &Pubkey, campaign_id: u64) -> Option<UserClaimInfo> {
        let slot = read(&self.campaigns).get(&campaign_id).map(Arc::clone)?;
        let record = lock(&slot).claims.get(claimer).cloned();
        record
    }

    /// Sum of every campaign balance plus every claimed amount
    pub fn accounted_total(&self) -> u128 {
        let slots: Vec<_> = read(&self.campaigns).values().map(Arc::clone).collect();
        slots
            .iter()
            .map(|slot| {
                let slot = lock(slot);
                let claimed: u128 = slot
                    .claims
                    .values()
                    .map(|record| record.claimed_amount as u128)
                    .sum();
                slot.info.amount as u128 + claimed
            })
            .sum()
    }

    /// Runs `f` with shared access to the vault
    pub fn with_vault<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        let vault = lock(&self.vault);
        f(&vault)
    }

    fn campaign_slot(&self, campaign_id: u64) -> Result<Arc<Mutex<CampaignSlot>>> {
        read(&self.campaigns)
            .get(&campaign_id)
            .map(Arc::clone)
            .ok_or_else(|| error!(RewardPoolError::UnauthorizedCampaignId))
    }
}
