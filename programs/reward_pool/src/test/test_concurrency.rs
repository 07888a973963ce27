#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use anchor_lang::prelude::*;

    use crate::ledger::FixedAllowance;
    use crate::test::{draw, Fixture};

    #[test]
    fn test_parallel_claims_never_overdraw_a_campaign() {
        let fx = Arc::new(Fixture::new());
        fx.deposit(5_000, 0, 1).unwrap();

        let claimers: Vec<Pubkey> = (0..16).map(|_| Pubkey::new_unique()).collect();
        let mut policy = FixedAllowance::new();
        for claimer in &claimers {
            policy.set(1, *claimer, 1_000);
        }
        let policy = Arc::new(policy);

        let handles: Vec<_> = claimers
            .iter()
            .map(|claimer| {
                let fx = Arc::clone(&fx);
                let policy = Arc::clone(&policy);
                let claimer = *claimer;
                thread::spawn(move || {
                    let mut claimed = 0u64;
                    for _ in 0..10 {
                        if fx.book.claim_reward(&draw(claimer, 1, 100), &*policy).is_ok() {
                            claimed += 100;
                        }
                    }
                    (claimer, claimed)
                })
            })
            .collect();

        let mut total = 0u64;
        for handle in handles {
            let (claimer, claimed) = handle.join().unwrap();
            assert!(claimed <= 1_000);
            assert_eq!(fx.book.claimed_amount(&claimer, 1).unwrap(), claimed);
            assert_eq!(fx.balance_of(&claimer), claimed);
            total += claimed;
        }

        assert_eq!(total, 5_000);
        assert_eq!(fx.book.campaign(1).unwrap().amount, 0);
        assert_eq!(fx.custody_balance(), 0);
        assert_eq!(fx.book.accounted_total(), 5_000);
    }

    #[test]
    fn test_parallel_claims_by_one_claimer_respect_ceiling() {
        let fx = Arc::new(Fixture::new());
        let claimer = Pubkey::new_unique();
        fx.deposit(10_000, 0, 1).unwrap();
        let policy = Arc::new(FixedAllowance::new().with(1, claimer, 1_000));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let fx = Arc::clone(&fx);
                let policy = Arc::clone(&policy);
                thread::spawn(move || {
                    (0..5)
                        .filter(|_| fx.book.claim_reward(&draw(claimer, 1, 70), &*policy).is_ok())
                        .count() as u64
                })
            })
            .collect();
        let successes: u64 = handles.into_iter().map(|handle| handle.join().unwrap()).sum();

        // 14 * 70 = 980 fits, a 15th would reach 1050
        assert_eq!(successes, 14);
        assert_eq!(fx.book.claimed_amount(&claimer, 1).unwrap(), 980);
        assert_eq!(fx.book.campaign(1).unwrap().amount, 10_000 - 980);
    }

    #[test]
    fn test_campaigns_progress_independently() {
        let fx = Arc::new(Fixture::new());
        for campaign_id in 0..4u64 {
            fx.deposit(1_000, 0, campaign_id).unwrap();
        }
        let claimer = Pubkey::new_unique();
        let mut policy = FixedAllowance::new();
        for campaign_id in 0..4u64 {
            policy.set(campaign_id, claimer, 1_000);
        }
        let policy = Arc::new(policy);

        let handles: Vec<_> = (0..4u64)
            .map(|campaign_id| {
                let fx = Arc::clone(&fx);
                let policy = Arc::clone(&policy);
                thread::spawn(move || {
                    for _ in 0..10 {
                        fx.book
                            .claim_reward(&draw(claimer, campaign_id, 50), &*policy)
                            .unwrap();
                    }
                    fx.book
                        .withdraw_reward(&draw(fx.depositor, campaign_id, 500))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for campaign_id in 0..4u64 {
            assert_eq!(fx.book.campaign(campaign_id).unwrap().amount, 0);
            assert_eq!(fx.book.claimed_amount(&claimer, campaign_id).unwrap(), 500);
        }
        assert_eq!(fx.balance_of(&claimer), 2_000);
        assert_eq!(fx.custody_balance(), 0);
    }
}
