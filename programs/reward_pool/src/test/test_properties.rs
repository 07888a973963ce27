#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;
    use proptest::prelude::*;

    use crate::ledger::{EntitlementPolicy, FixedAllowance};
    use crate::state::*;
    use crate::test::{draw, Fixture, DEPOSITOR_FUNDS};

    const CAMPAIGNS: u64 = 3;
    const CLAIMERS: usize = 3;

    #[derive(Clone, Debug)]
    enum Op {
        Deposit { campaign_id: u64, amount: u64, fee: u64 },
        Claim { claimer: usize, campaign_id: u64, amount: u64 },
        Withdraw { by_owner: bool, campaign_id: u64, amount: u64 },
        Pause,
        Unpause,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0..CAMPAIGNS, 0u64..2_000, 0u64..300)
                .prop_map(|(campaign_id, amount, fee)| Op::Deposit { campaign_id, amount, fee }),
            5 => (0..CLAIMERS, 0..CAMPAIGNS, 0u64..600)
                .prop_map(|(claimer, campaign_id, amount)| Op::Claim { claimer, campaign_id, amount }),
            2 => (any::<bool>(), 0..CAMPAIGNS, 0u64..800)
                .prop_map(|(by_owner, campaign_id, amount)| Op::Withdraw { by_owner, campaign_id, amount }),
            1 => Just(Op::Pause),
            1 => Just(Op::Unpause),
        ]
    }

    /// Every record and balance an operation can touch
    #[derive(Debug, PartialEq)]
    struct Snapshot {
        pool: RewardPoolState,
        campaigns: Vec<Option<RewardInfo>>,
        claims: Vec<Option<UserClaimInfo>>,
        /// custody, depositor, creator, then each claimer
        balances: Vec<u64>,
    }

    fn snapshot(fx: &Fixture, claimers: &[Pubkey]) -> Snapshot {
        let campaigns = (0..CAMPAIGNS).map(|id| fx.book.campaign(id)).collect();
        let claims = (0..CAMPAIGNS)
            .flat_map(|id| claimers.iter().map(move |claimer| (id, *claimer)))
            .map(|(id, claimer)| fx.book.claim_record(&claimer, id))
            .collect();
        let mut balances = vec![
            fx.custody_balance(),
            fx.balance_of(&fx.depositor),
            fx.balance_of(&fx.creator),
        ];
        balances.extend(claimers.iter().map(|claimer| fx.balance_of(claimer)));

        Snapshot {
            pool: fx.book.pool(),
            campaigns,
            claims,
            balances,
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_any_sequence_conserves_funds_and_respects_ceilings(
            ops in prop::collection::vec(op(), 1..60),
            ceilings in prop::collection::vec(0u64..1_000, CLAIMERS * CAMPAIGNS as usize),
        ) {
            let fx = Fixture::new();
            let claimers: Vec<Pubkey> = (0..CLAIMERS).map(|_| Pubkey::new_unique()).collect();
            let stranger = Pubkey::new_unique();

            let mut policy = FixedAllowance::new();
            for (index, ceiling) in ceilings.iter().enumerate() {
                let campaign_id = (index / CLAIMERS) as u64;
                policy.set(campaign_id, claimers[index % CLAIMERS], *ceiling);
            }

            let mut net_deposited: u128 = 0;
            let mut withdrawn: u128 = 0;

            for op in ops {
                let before = snapshot(&fx, &claimers);
                let outcome = match op {
                    Op::Deposit { campaign_id, amount, fee } => fx
                        .deposit(amount, fee, campaign_id)
                        .map(|net| net_deposited += net as u128),
                    Op::Claim { claimer, campaign_id, amount } => fx
                        .book
                        .claim_reward(&draw(claimers[claimer], campaign_id, amount), &policy)
                        .map(|_| ()),
                    Op::Withdraw { by_owner, campaign_id, amount } => {
                        let actor = if by_owner { fx.depositor } else { stranger };
                        fx.book
                            .withdraw_reward(&draw(actor, campaign_id, amount))
                            .map(|_| withdrawn += amount as u128)
                    }
                    Op::Pause => fx.book.pause(&fx.creator),
                    Op::Unpause => fx.book.unpause(&fx.creator),
                };
                let after = snapshot(&fx, &claimers);

                // A rejected operation changes nothing
                if outcome.is_err() {
                    prop_assert_eq!(&before, &after);
                }

                prop_assert_eq!(fx.book.accounted_total() + withdrawn, net_deposited);

                let open: u64 = after.campaigns.iter().flatten().map(|campaign| campaign.amount).sum();
                prop_assert_eq!(after.balances[0], open);

                for record in after.claims.iter().flatten() {
                    let ceiling = policy.ceiling(record.campaign_id, &record.claimer).unwrap();
                    prop_assert!(record.claimed_amount <= ceiling);
                }
            }

            let supply = fx.book.with_vault(|vault| vault.total_supply());
            prop_assert_eq!(supply, DEPOSITOR_FUNDS as u128);
        }
    }
}
