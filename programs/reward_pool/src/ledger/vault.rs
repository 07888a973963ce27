use std::collections::HashMap;

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::error::*;

/// Custody boundary the ledger moves tokens through.
///
/// Account handles are token account addresses. The ledger never touches
/// balances directly; every token movement goes through `transfer`.
pub trait VaultAdapter {
    /// Returns the associated token account of `owner` for `token`, creating
    /// it when it does not exist yet.
    fn associated_account(&mut self, owner: &Pubkey, token: &Pubkey) -> Result<Pubkey>;

    /// Moves `amount` tokens between two token accounts.
    ///
    /// Fails with `InsufficientFunds` when `from` holds less than `amount`;
    /// no balance changes in that case.
    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;
}

/// In-memory custody used for off-chain simulation and tests
#[derive(Default, Debug, Clone)]
pub struct MemoryVault {
    balances: HashMap<Pubkey, u64>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` freshly minted tokens to the owner's associated account
    pub fn mint_to(&mut self, owner: &Pubkey, token: &Pubkey, amount: u64) -> Result<Pubkey> {
        let account = self.associated_account(owner, token)?;
        let balance = self.balances.entry(account).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        Ok(account)
    }

    /// Balance of a token account, zero when it was never created
    pub fn balance(&self, account: &Pubkey) -> u64 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Balance of the owner's associated account for `token`
    pub fn balance_of(&self, owner: &Pubkey, token: &Pubkey) -> u64 {
        self.balance(&get_associated_token_address(owner, token))
    }

    /// Sum of every balance held in this vault
    pub fn total_supply(&self) -> u128 {
        self.balances.values().map(|balance| *balance as u128).sum()
    }
}

impl VaultAdapter for MemoryVault {
    fn associated_account(&mut self, owner: &Pubkey, token: &Pubkey) -> Result<Pubkey> {
        require_keys_neq!(*owner, Pubkey::default(), RewardPoolError::InvalidAddress);
        let account = get_associated_token_address(owner, token);
        self.balances.entry(account).or_insert(0);
        Ok(account)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let source = self
            .balances
            .get(from)
            .copied()
            .ok_or(RewardPoolError::InvalidAddress)?;
        let destination = self
            .balances
            .get(to)
            .copied()
            .ok_or(RewardPoolError::InvalidAddress)?;
        require!(source >= amount, RewardPoolError::InsufficientFunds);
        if from == to {
            return Ok(());
        }

        let source = source
            .checked_sub(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        let destination = destination
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        self.balances.insert(*from, source);
        self.balances.insert(*to, destination);
        Ok(())
    }
}
