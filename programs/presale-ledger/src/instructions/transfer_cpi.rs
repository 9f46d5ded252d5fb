use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Transfer};
use solana_program::{program::invoke, system_instruction};

use crate::errors::PresaleError;
use crate::state::ProgramSigner;
use crate::transfers::{Authority, Transfers};

/// [`Transfers`] backed by CPIs into the System and Token programs.
///
/// Every account a transfer touches must be registered with
/// [`CpiTransfers::with_account`]; transfers are resolved by key.
pub struct CpiTransfers<'info> {
    system_program: Option<AccountInfo<'info>>,
    token_program: Option<AccountInfo<'info>>,
    mint: Option<AccountInfo<'info>>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> CpiTransfers<'info> {
    pub fn new() -> Self {
        Self {
            system_program: None,
            token_program: None,
            mint: None,
            accounts: Vec::new(),
        }
    }

    pub fn with_system_program(mut self, program: AccountInfo<'info>) -> Self {
        self.system_program = Some(program);
        self
    }

    pub fn with_token_program(mut self, program: AccountInfo<'info>) -> Self {
        self.token_program = Some(program);
        self
    }

    pub fn with_mint(mut self, mint: AccountInfo<'info>) -> Self {
        self.mint = Some(mint);
        self
    }

    pub fn with_account(mut self, account: AccountInfo<'info>) -> Self {
        self.accounts.push(account);
        self
    }

    fn account(&self, key: &Pubkey) -> Result<AccountInfo<'info>> {
        self.accounts
            .iter()
            .find(|account| account.key == key)
            .cloned()
            .ok_or_else(|| error!(PresaleError::UnknownAccount))
    }

    fn token_program(&self) -> Result<AccountInfo<'info>> {
        self.token_program
            .clone()
            .ok_or_else(|| error!(PresaleError::UnknownAccount))
    }
}

impl<'info> Transfers for CpiTransfers<'info> {
    fn transfer_value(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        let system_program = self
            .system_program
            .clone()
            .ok_or_else(|| error!(PresaleError::UnknownAccount))?;

        let ix = system_instruction::transfer(from, to, amount);
        invoke(&ix, &[self.account(from)?, self.account(to)?, system_program])?;
        Ok(())
    }

    fn transfer_token(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
        authority: Authority,
    ) -> Result<()> {
        let accounts = Transfer {
            from: self.account(from)?,
            to: self.account(to)?,
            authority: self.account(&authority.key())?,
        };
        let program = self.token_program()?;

        match authority {
            Authority::Wallet(_) => token::transfer(CpiContext::new(program, accounts), amount),
            Authority::Program(signer) => {
                let seeds = signer.seeds();
                let signer_seeds = &[&seeds[..]];
                token::transfer(
                    CpiContext::new_with_signer(program, accounts, signer_seeds),
                    amount,
                )
            }
        }
    }

    fn burn_token(&mut self, from: &Pubkey, amount: u64, signer: ProgramSigner) -> Result<()> {
        let accounts = Burn {
            mint: self
                .mint
                .clone()
                .ok_or_else(|| error!(PresaleError::InvalidTokenMint))?,
            from: self.account(from)?,
            authority: self.account(&signer.address())?,
        };
        let program = self.token_program()?;

        let seeds = signer.seeds();
        let signer_seeds = &[&seeds[..]];
        token::burn(
            CpiContext::new_with_signer(program, accounts, signer_seeds),
            amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_presale_error;

    #[test]
    fn test_unregistered_account_is_rejected() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 1_000;
        let mut data = [0u8; 0];
        let info = AccountInfo::new(&key, true, true, &mut lamports, &mut data, &owner, false, 0);

        let bank = CpiTransfers::new().with_account(info);
        assert_eq!(*bank.account(&key).unwrap().key, key);
        assert_presale_error(
            bank.account(&Pubkey::new_unique()),
            PresaleError::UnknownAccount,
        );
    }

    #[test]
    fn test_missing_programs_fail_before_any_cpi() {
        let from = Pubkey::new_unique();
        let to = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let (mut from_lamports, mut to_lamports) = (1_000, 0);
        let (mut from_data, mut to_data) = ([0u8; 0], [0u8; 0]);
        let mut bank = CpiTransfers::new()
            .with_account(AccountInfo::new(
                &from, true, true, &mut from_lamports, &mut from_data, &owner, false, 0,
            ))
            .with_account(AccountInfo::new(
                &to, false, true, &mut to_lamports, &mut to_data, &owner, false, 0,
            ));

        assert_presale_error(
            bank.transfer_value(&from, &to, 10),
            PresaleError::UnknownAccount,
        );
        assert_presale_error(
            bank.transfer_token(&from, &to, 10, Authority::Wallet(from)),
            PresaleError::UnknownAccount,
        );
        assert_presale_error(
            bank.burn_token(&from, 10, ProgramSigner::derive(&crate::ID)),
            PresaleError::InvalidTokenMint,
        );
    }
}
