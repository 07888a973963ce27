use anchor_lang::prelude::*;

use crate::error::*;

/// Role an acting identity must hold for an operation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// Administrator of the pool (pause, unpause, set_tax_recipient)
    PoolCreator,
    /// Depositor who funded a campaign (withdraw, set_allocation_root)
    CampaignOwner,
    /// Owner of a claim record (claim, get_claimed_amount)
    SelfClaimant,
}

impl Role {
    /// Error surfaced when the acting identity does not hold this role
    pub fn denial(self) -> RewardPoolError {
        match self {
            Role::PoolCreator => RewardPoolError::Unauthorized,
            Role::CampaignOwner => RewardPoolError::OnlyCampaignCreatorAllowed,
            Role::SelfClaimant => RewardPoolError::Unauthorized,
        }
    }
}

/// Checks that `acting` is the identity `role` requires.
///
/// Pure check with no side effects; callers run it before mutating anything.
pub fn authorize(role: Role, required: &Pubkey, acting: &Pubkey) -> Result<()> {
    if required != acting {
        return Err(role.denial().into());
    }
    Ok(())
}
