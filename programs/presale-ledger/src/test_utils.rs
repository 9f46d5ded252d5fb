use std::collections::HashMap;
use std::fmt::Debug;

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::errors::PresaleError;
use crate::state::ProgramSigner;
use crate::transfers::{Authority, Transfers};

fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(e) => Some(e.error_code_number),
        Error::ProgramError(_) => None,
    }
}

pub fn assert_presale_error<T: Debug>(result: Result<T>, expected: PresaleError) {
    let err = result.expect_err("operation should have failed");
    let expected: Error = expected.into();
    assert_eq!(
        error_code(&err),
        error_code(&expected),
        "got {err:?}, expected {expected:?}"
    );
}

#[derive(Debug)]
struct TokenAccountState {
    authority: Pubkey,
    amount: u64,
}

/// In-memory stand-in for the System and Token programs.
#[derive(Debug, Default)]
pub struct MemBank {
    lamports: HashMap<Pubkey, u64>,
    token_accounts: HashMap<Pubkey, TokenAccountState>,
    supply: u64,
    burned: u64,
}

impl MemBank {
    pub fn credit_lamports(&mut self, key: &Pubkey, amount: u64) {
        *self.lamports.entry(*key).or_default() += amount;
    }

    pub fn lamports(&self, key: &Pubkey) -> u64 {
        self.lamports.get(key).copied().unwrap_or_default()
    }

    pub fn open_token_account(&mut self, address: Pubkey, authority: Pubkey) {
        self.token_accounts
            .insert(address, TokenAccountState { authority, amount: 0 });
    }

    pub fn mint_to(&mut self, address: &Pubkey, amount: u64) {
        self.token_accounts
            .get_mut(address)
            .expect("token account must be opened first")
            .amount += amount;
        self.supply += amount;
    }

    pub fn token_balance(&self, address: &Pubkey) -> u64 {
        self.token_accounts
            .get(address)
            .map(|account| account.amount)
            .unwrap_or_default()
    }

    pub fn supply(&self) -> u64 {
        self.supply
    }

    pub fn burned(&self) -> u64 {
        self.burned
    }

    fn debit_token(&mut self, from: &Pubkey, amount: u64, authority: Authority) -> Result<()> {
        let account = self
            .token_accounts
            .get_mut(from)
            .ok_or(ProgramError::UninitializedAccount)?;
        if account.authority != authority.key() {
            return Err(ProgramError::MissingRequiredSignature.into());
        }
        account.amount = account
            .amount
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        Ok(())
    }
}

impl Transfers for MemBank {
    fn transfer_value(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let balance = self.lamports(from);
        let remaining = balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        self.lamports.insert(*from, remaining);
        self.credit_lamports(to, amount);
        Ok(())
    }

    fn transfer_token(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
        authority: Authority,
    ) -> Result<()> {
        if !self.token_accounts.contains_key(to) {
            return Err(ProgramError::UninitializedAccount.into());
        }
        self.debit_token(from, amount, authority)?;
        if let Some(account) = self.token_accounts.get_mut(to) {
            account.amount += amount;
        }
        Ok(())
    }

    fn burn_token(&mut self, from: &Pubkey, amount: u64, signer: ProgramSigner) -> Result<()> {
        self.debit_token(from, amount, Authority::Program(signer))?;
        self.supply -= amount;
        self.burned += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_bank_enforces_token_authority() {
        let mut bank = MemBank::default();
        let owner = Pubkey::new_unique();
        let vault = Pubkey::new_unique();
        let signer = ProgramSigner::derive(&crate::ID);
        let escrow = Pubkey::new_unique();
        bank.open_token_account(vault, owner);
        bank.open_token_account(escrow, signer.address());
        bank.mint_to(&vault, 10);

        assert!(bank
            .transfer_token(&vault, &escrow, 5, Authority::Program(signer))
            .is_err());
        bank.transfer_token(&vault, &escrow, 5, Authority::Wallet(owner))
            .unwrap();
        // The vault belongs to a wallet, not the program.
        assert!(bank.burn_token(&vault, 1, signer).is_err());
        bank.burn_token(&escrow, 5, signer).unwrap();

        assert_eq!(bank.token_balance(&vault), 5);
        assert_eq!(bank.token_balance(&escrow), 0);
        assert_eq!(bank.supply(), 5);
        assert_eq!(bank.burned(), 5);
    }
}
