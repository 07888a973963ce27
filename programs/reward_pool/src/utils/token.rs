use anchor_lang::prelude::*;
use anchor_spl::associated_token::{
    create_idempotent, get_associated_token_address_with_program_id, Create,
};
use anchor_spl::token_interface::{transfer_checked, TokenAccount, TransferChecked};

use crate::error::*;
use crate::ledger::VaultAdapter;

/// Universal token transfer function that supports both SPL Token and Token 2022
pub fn transfer_token<'a>(
    authority: AccountInfo<'a>,
    from: AccountInfo<'a>,
    to: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: Option<&[&[&[u8]]]>,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from,
        mint,
        to,
        authority,
    };

    let cpi_program = token_program;

    let cpi_ctx = if let Some(seeds) = signer_seeds {
        CpiContext::new_with_signer(cpi_program, cpi_accounts, seeds)
    } else {
        CpiContext::new(cpi_program, cpi_accounts)
    };

    transfer_checked(cpi_ctx, amount, decimals)
}

/// Token account taking part in one instruction
struct CustodyAccount<'a, 'info> {
    key: Pubkey,
    token_account: AccountInfo<'info>,
    /// Owner of the token account, signs transfers out of it
    authority: AccountInfo<'info>,
    /// PDA seeds when the authority is a program address
    signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
    /// Balance tracked across the CPIs of this instruction
    balance: u64,
}

/// Accounts used to create an associated token account on demand
struct AccountFunding<'info> {
    payer: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    associated_token_program: AccountInfo<'info>,
}

/// Vault adapter backed by token program CPIs.
///
/// Only the token accounts registered by the instruction are reachable;
/// asking for any other associated account fails with `InvalidAddress`.
pub struct TokenCpiVault<'a, 'info> {
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    decimals: u8,
    accounts: Vec<CustodyAccount<'a, 'info>>,
    funding: Option<AccountFunding<'info>>,
}

impl<'a, 'info> TokenCpiVault<'a, 'info> {
    pub fn new(token_program: AccountInfo<'info>, mint: AccountInfo<'info>, decimals: u8) -> Self {
        Self {
            token_program,
            mint,
            decimals,
            accounts: Vec::new(),
            funding: None,
        }
    }

    /// Registers an initialized token account and the authority that signs for it
    pub fn with_account(
        mut self,
        token_account: &InterfaceAccount<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
    ) -> Self {
        self.register(
            token_account.key(),
            token_account.to_account_info(),
            authority,
            signer_seeds,
            token_account.amount,
        );
        self
    }

    /// Registers a token account that only receives tokens and may not exist yet
    pub fn with_destination(mut self, token_account: AccountInfo<'info>, owner: AccountInfo<'info>) -> Self {
        self.register(token_account.key(), token_account, owner, None, 0);
        self
    }

    /// Lets `associated_account` create missing destinations, paid by `payer`
    pub fn with_funding(
        mut self,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
        associated_token_program: AccountInfo<'info>,
    ) -> Self {
        self.funding = Some(AccountFunding {
            payer,
            system_program,
            associated_token_program,
        });
        self
    }

    fn register(
        &mut self,
        key: Pubkey,
        token_account: AccountInfo<'info>,
        authority: AccountInfo<'info>,
        signer_seeds: Option<&'a [&'a [&'a [u8]]]>,
        balance: u64,
    ) {
        // The same account may be passed twice (tax recipient == depositor)
        if self.accounts.iter().any(|account| account.key == key) {
            return;
        }
        self.accounts.push(CustodyAccount {
            key,
            token_account,
            authority,
            signer_seeds,
            balance,
        });
    }

    fn position(&self, key: &Pubkey) -> Result<usize> {
        self.accounts
            .iter()
            .position(|account| account.key == *key)
            .ok_or_else(|| error!(RewardPoolError::InvalidAddress))
    }

    fn create_if_missing(&self, index: usize) -> Result<()> {
        let account = &self.accounts[index];
        if !account.token_account.data_is_empty() {
            return Ok(());
        }
        let funding = self
            .funding
            .as_ref()
            .ok_or(RewardPoolError::InvalidAddress)?;
        create_idempotent(CpiContext::new(
            funding.associated_token_program.clone(),
            Create {
                payer: funding.payer.clone(),
                associated_token: account.token_account.clone(),
                authority: account.authority.clone(),
                mint: self.mint.clone(),
                system_program: funding.system_program.clone(),
                token_program: self.token_program.clone(),
            },
        ))
    }
}

impl<'a, 'info> VaultAdapter for TokenCpiVault<'a, 'info> {
    fn associated_account(&mut self, owner: &Pubkey, token: &Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*token, self.mint.key(), RewardPoolError::TokenMintMismatch);
        let address = get_associated_token_address_with_program_id(owner, token, self.token_program.key);
        let index = self.position(&address)?;
        require_keys_eq!(
            self.accounts[index].authority.key(),
            *owner,
            RewardPoolError::InvalidAddress
        );
        self.create_if_missing(index)?;
        Ok(address)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let from_index = self.position(from)?;
        let to_index = self.position(to)?;
        require!(
            self.accounts[from_index].balance >= amount,
            RewardPoolError::InsufficientFunds
        );
        if amount == 0 || from_index == to_index {
            return Ok(());
        }

        let source_balance = self.accounts[from_index]
            .balance
            .checked_sub(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;
        let destination_balance = self.accounts[to_index]
            .balance
            .checked_add(amount)
            .ok_or(RewardPoolError::ArithmeticError)?;

        let source = &self.accounts[from_index];
        transfer_token(
            source.authority.clone(),
            source.token_account.clone(),
            self.accounts[to_index].token_account.clone(),
            self.mint.clone(),
            self.token_program.clone(),
            amount,
            self.decimals,
            source.signer_seeds,
        )?;

        self.accounts[from_index].balance = source_balance;
        self.accounts[to_index].balance = destination_balance;
        Ok(())
    }
}
