#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::error::RewardPoolError;
    use crate::ledger::{authorize, Role};
    use crate::test::assert_error;

    #[test]
    fn test_matching_identity_is_authorized() {
        let identity = Pubkey::new_unique();
        for role in [Role::PoolCreator, Role::CampaignOwner, Role::SelfClaimant] {
            assert!(authorize(role, &identity, &identity).is_ok());
        }
    }

    #[test]
    fn test_each_role_reports_its_own_error() {
        let required = Pubkey::new_unique();
        let acting = Pubkey::new_unique();

        assert_error(
            authorize(Role::PoolCreator, &required, &acting),
            RewardPoolError::Unauthorized,
        );
        assert_error(
            authorize(Role::CampaignOwner, &required, &acting),
            RewardPoolError::OnlyCampaignCreatorAllowed,
        );
        assert_error(
            authorize(Role::SelfClaimant, &required, &acting),
            RewardPoolError::Unauthorized,
        );
    }

    #[test]
    fn test_default_identity_never_matches_a_real_one() {
        let real = Pubkey::new_unique();
        assert!(authorize(Role::PoolCreator, &real, &Pubkey::default()).is_err());
        assert!(authorize(Role::PoolCreator, &Pubkey::default(), &real).is_err());
    }
}
