use std::collections::HashMap;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::constants::*;
use crate::utils::verify;

/// Source of the maximum cumulative amount a claimer may take from a campaign
pub trait EntitlementPolicy {
    fn ceiling(&self, campaign_id: u64, claimer: &Pubkey) -> Result<u64>;
}

/// Ceilings from an explicit (campaign, claimer) table; absent entries are zero
#[derive(Default, Debug, Clone)]
pub struct FixedAllowance {
    allowances: HashMap<(u64, Pubkey), u64>,
}

impl FixedAllowance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, campaign_id: u64, claimer: Pubkey, ceiling: u64) -> Self {
        self.set(campaign_id, claimer, ceiling);
        self
    }

    pub fn set(&mut self, campaign_id: u64, claimer: Pubkey, ceiling: u64) {
        self.allowances.insert((campaign_id, claimer), ceiling);
    }
}

impl EntitlementPolicy for FixedAllowance {
    fn ceiling(&self, campaign_id: u64, claimer: &Pubkey) -> Result<u64> {
        Ok(self
            .allowances
            .get(&(campaign_id, *claimer))
            .copied()
            .unwrap_or_default())
    }
}

/// Ceiling proven against a campaign's allocation root.
///
/// The claimer presents `max_amount` and a proof for the leaf
/// `hash(claimer, campaign_id, max_amount)`. A valid proof yields
/// `max_amount`; anything else yields zero, which no positive claim fits.
pub struct MerkleAllowance<'a> {
    root: [u8; 32],
    max_amount: u64,
    proof: &'a [[u8; 32]],
}

impl<'a> MerkleAllowance<'a> {
    pub fn new(root: [u8; 32], max_amount: u64, proof: &'a [[u8; 32]]) -> Self {
        Self {
            root,
            max_amount,
            proof,
        }
    }
}

impl EntitlementPolicy for MerkleAllowance<'_> {
    fn ceiling(&self, campaign_id: u64, claimer: &Pubkey) -> Result<u64> {
        if self.root == EMPTY_ROOT {
            return Ok(0);
        }
        let leaf = allocation_leaf(claimer, campaign_id, self.max_amount);
        if verify(self.proof, self.root, leaf) {
            Ok(self.max_amount)
        } else {
            Ok(0)
        }
    }
}

/// Leaf of an allocation tree: hash(claimer, campaign_id_le, max_amount_le)
pub fn allocation_leaf(claimer: &Pubkey, campaign_id: u64, max_amount: u64) -> [u8; 32] {
    hashv(&[
        &claimer.to_bytes(),
        &campaign_id.to_le_bytes(),
        &max_amount.to_le_bytes(),
    ])
    .to_bytes()
}
