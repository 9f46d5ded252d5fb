use anchor_lang::prelude::*;

use crate::state::ProgramSigner;

/// Who authorizes a token movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authority {
    /// A wallet that signed the transaction.
    Wallet(Pubkey),
    /// The program itself, acting for the sale configuration PDA.
    Program(ProgramSigner),
}

impl Authority {
    pub fn key(&self) -> Pubkey {
        match self {
            Authority::Wallet(key) => *key,
            Authority::Program(signer) => signer.address(),
        }
    }
}

/// Value and token movement primitives the state machine relies on.
///
/// Each call either completes or fails the whole instruction; the state
/// machine issues at most one call per transition and mutates its accounts
/// only after the call returns `Ok`.
///
/// There is no token id parameter: a sale deals in a single mint, and every
/// token account passed in is bound to that mint by the instruction's
/// account constraints, so the mint is implied by the accounts.
pub trait Transfers {
    /// Moves lamports between two system accounts; `from` must have signed.
    fn transfer_value(&mut self, from: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Moves sale tokens between two token accounts.
    fn transfer_token(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
        authority: Authority,
    ) -> Result<()>;

    /// Burns sale tokens held by `from`, reducing mint supply. Only the
    /// program's custody is ever burned, so only the program signs.
    fn burn_token(&mut self, from: &Pubkey, amount: u64, signer: ProgramSigner) -> Result<()>;
}
