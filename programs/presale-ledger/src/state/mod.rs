use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::PresaleError;

/// Singleton sale configuration, stored at [`sale_config_address`].
///
/// The same PDA is the token authority of the custody vault, so it is also
/// the program-derived signer for every transfer out of escrow.
#[account]
#[derive(Default, Debug)]
pub struct SaleConfig {
    /// Flips to true exactly once, in `initialize`
    pub initialized: bool,
    /// First writer of the configuration; immutable
    pub admin: Pubkey,
    /// Mint of the token being sold; immutable
    pub token_mint: Pubkey,
    /// Custody token account owned by this PDA
    pub vault: Pubkey,
    /// Recipient of paid-in lamports; immutable
    pub treasury: Pubkey,
    /// Lamports required per token unit
    pub unit_price: u64,
    /// Purchases are accepted while `now < deadline`
    pub deadline: i64,
    /// Cumulative units funded by the admin
    pub inventory_deposited: u64,
    /// Cumulative units credited to buyers
    pub tokens_sold: u64,
    /// Sum of every buyer's unclaimed entitlement
    pub outstanding_entitlement: u64,
    /// Cumulative lamports sent to the treasury
    pub total_raised: u64,
    /// Cumulative units burned by sweeps
    pub tokens_swept: u64,
    pub swept: bool,
    pub bump: u8,
    pub vault_bump: u8,
}

impl SaleConfig {
    pub const LEN: usize = 8 +  // discriminator
        1 +   // initialized
        32 +  // admin
        32 +  // token_mint
        32 +  // vault
        32 +  // treasury
        8 +   // unit_price
        8 +   // deadline
        8 +   // inventory_deposited
        8 +   // tokens_sold
        8 +   // outstanding_entitlement
        8 +   // total_raised
        8 +   // tokens_swept
        1 +   // swept
        1 +   // bump
        1 +   // vault_bump
        64;   // padding for future use

    /// Units funded but neither sold nor swept.
    pub fn unsold_inventory(&self) -> u64 {
        self.inventory_deposited
            .saturating_sub(self.tokens_sold)
            .saturating_sub(self.tokens_swept)
    }
}

/// Per-buyer record, stored at [`buyer_ledger_address`].
#[account]
#[derive(Default, Debug)]
pub struct BuyerLedger {
    pub initialized: bool,
    pub owner: Pubkey,
    /// Purchased units not yet claimed
    pub entitlement: u64,
    pub total_purchased: u64,
    pub total_claimed: u64,
    pub bump: u8,
}

impl BuyerLedger {
    // discriminator(8) + initialized(1) + owner(32) + entitlement(8)
    // + total_purchased(8) + total_claimed(8) + bump(1) + padding(32)
    pub const LEN: usize = 8 + 1 + 32 + 8 + 8 + 8 + 1 + 32;
}

pub fn sale_config_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_SALE_CONFIG], program_id)
}

pub fn buyer_ledger_address(owner: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_BUYER_LEDGER, owner.as_ref()], program_id)
}

pub fn sale_vault_address(sale_config: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_SALE_VAULT, sale_config.as_ref()], program_id)
}

/// Capability for "this program, acting for the sale configuration".
///
/// There is no private key behind the sale configuration address. The only
/// ways to obtain a `ProgramSigner` are deriving the PDA or re-deriving it
/// from a stored bump, so holding one proves the address is the program's
/// own. Its seeds are what the runtime checks when a CPI is signed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramSigner {
    address: Pubkey,
    bump: u8,
}

impl ProgramSigner {
    pub fn derive(program_id: &Pubkey) -> Self {
        let (address, bump) = sale_config_address(program_id);
        Self { address, bump }
    }

    /// Rebuilds the signer from a stored bump, rejecting a bump that does not
    /// produce the sale configuration address.
    pub fn from_bump(program_id: &Pubkey, bump: u8) -> Result<Self> {
        let address = Pubkey::create_program_address(&[SEED_SALE_CONFIG, &[bump]], program_id)
            .map_err(|_| PresaleError::InvalidProgramSigner)?;
        let (canonical, _) = sale_config_address(program_id);
        require_keys_eq!(address, canonical, PresaleError::InvalidProgramSigner);
        Ok(Self { address, bump })
    }

    pub fn address(&self) -> Pubkey {
        self.address
    }

    pub fn bump(&self) -> u8 {
        self.bump
    }

    pub fn seeds(&self) -> [&[u8]; 2] {
        [SEED_SALE_CONFIG, std::slice::from_ref(&self.bump)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_presale_error;

    #[test]
    fn test_addresses_are_deterministic() {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();

        assert_eq!(sale_config_address(&program_id), sale_config_address(&program_id));
        assert_eq!(
            buyer_ledger_address(&owner, &program_id),
            buyer_ledger_address(&owner, &program_id)
        );
        assert_ne!(
            buyer_ledger_address(&owner, &program_id).0,
            buyer_ledger_address(&Pubkey::new_unique(), &program_id).0
        );

        let (sale, _) = sale_config_address(&program_id);
        assert_ne!(sale_vault_address(&sale, &program_id).0, sale);
        assert_ne!(sale_config_address(&Pubkey::new_unique()).0, sale);
    }

    #[test]
    fn test_program_signer_from_bump() {
        let program_id = crate::ID;
        let derived = ProgramSigner::derive(&program_id);

        let rebuilt = ProgramSigner::from_bump(&program_id, derived.bump()).unwrap();
        assert_eq!(rebuilt, derived);
        assert_eq!(rebuilt.address(), sale_config_address(&program_id).0);
        assert_eq!(rebuilt.seeds()[0], SEED_SALE_CONFIG);
        assert_eq!(rebuilt.seeds()[1], &[derived.bump()]);
    }

    #[test]
    fn test_program_signer_rejects_foreign_bump() {
        let program_id = crate::ID;
        let canonical = ProgramSigner::derive(&program_id).bump();

        // Any other bump either lands on the curve or yields a different
        // address; both are rejected.
        let other = canonical.wrapping_sub(1);
        assert_presale_error(
            ProgramSigner::from_bump(&program_id, other),
            PresaleError::InvalidProgramSigner,
        );
    }

    #[test]
    fn test_unsold_inventory() {
        let sale = SaleConfig {
            inventory_deposited: 1_000,
            tokens_sold: 300,
            tokens_swept: 200,
            ..Default::default()
        };
        assert_eq!(sale.unsold_inventory(), 500);

        let drained = SaleConfig {
            inventory_deposited: 1_000,
            tokens_sold: 300,
            tokens_swept: 900,
            ..Default::default()
        };
        assert_eq!(drained.unsold_inventory(), 0);
    }
}
