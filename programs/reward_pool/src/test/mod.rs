pub mod test_authority;
pub mod test_concurrency;
pub mod test_properties;

use anchor_lang::error::{Error, ERROR_CODE_OFFSET};
use anchor_lang::prelude::*;

use crate::error::RewardPoolError;
use crate::ledger::{DepositTerms, Draw, MemoryVault, RewardBook};

/// Asserts that `result` failed with the given program error
pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: RewardPoolError) {
    let expected_code = expected as u32 + ERROR_CODE_OFFSET;
    match result {
        Ok(value) => panic!("expected error {}, got Ok({:?})", expected_code, value),
        Err(Error::AnchorError(err)) => assert_eq!(
            err.error_code_number, expected_code,
            "expected error {}, got {} ({})",
            expected_code, err.error_code_number, err.error_msg
        ),
        Err(Error::ProgramError(err)) => panic!("expected error {}, got {:?}", expected_code, err),
    }
}

/// A freshly initialized pool with one funded depositor
pub struct Fixture {
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub depositor: Pubkey,
    pub custody: Pubkey,
    pub book: RewardBook<MemoryVault>,
}

pub const DEPOSITOR_FUNDS: u64 = 1_000_000;

impl Fixture {
    pub fn new() -> Self {
        let creator = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let depositor = Pubkey::new_unique();

        let mut vault = MemoryVault::new();
        vault.mint_to(&depositor, &mint, DEPOSITOR_FUNDS).unwrap();

        let book = RewardBook::new(vault);
        let custody = book.initialize(creator, mint).unwrap();

        Self {
            creator,
            mint,
            depositor,
            custody,
            book,
        }
    }

    pub fn terms(&self, campaign_amount: u64, fee_amount: u64, campaign_id: u64) -> DepositTerms {
        DepositTerms {
            depositor: self.depositor,
            token_address: self.mint,
            campaign_amount,
            fee_amount,
            campaign_id,
        }
    }

    pub fn deposit(&self, campaign_amount: u64, fee_amount: u64, campaign_id: u64) -> Result<u64> {
        self.book.deposit_reward(&self.terms(campaign_amount, fee_amount, campaign_id))
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.book.with_vault(|vault| vault.balance_of(owner, &self.mint))
    }

    pub fn custody_balance(&self) -> u64 {
        self.book.with_vault(|vault| vault.balance(&self.custody))
    }
}

pub fn draw(actor: Pubkey, campaign_id: u64, amount: u64) -> Draw {
    Draw {
        actor,
        campaign_id,
        amount,
    }
}
