//! Presale state machine.
//!
//! Every transition follows the same shape: validate all preconditions and
//! compute the new counter values, issue at most one transfer, then write
//! state. A failed check or transfer therefore leaves the accounts untouched.

use anchor_lang::prelude::*;

use crate::errors::PresaleError;
use crate::math::{checked_add, checked_sub, is_within_window, tokens_for_payment};
use crate::state::{BuyerLedger, ProgramSigner, SaleConfig};
use crate::transfers::{Authority, Transfers};

/// Execution environment for one transition.
#[derive(Clone, Copy, Debug)]
pub struct Env {
    pub program_id: Pubkey,
    /// Runtime clock at execution time, never caller supplied
    pub now: i64,
}

impl Env {
    pub fn new(program_id: &Pubkey, now: i64) -> Self {
        Self {
            program_id: *program_id,
            now,
        }
    }
}

/// Fields fixed at initialization.
#[derive(Clone, Copy, Debug)]
pub struct InitializeParams {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub vault: Pubkey,
    pub unit_price: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

fn require_initialized(sale: &SaleConfig) -> Result<()> {
    require!(sale.initialized, PresaleError::NotInitialized);
    Ok(())
}

fn require_admin(sale: &SaleConfig, caller: &Pubkey) -> Result<()> {
    require_initialized(sale)?;
    require_keys_eq!(*caller, sale.admin, PresaleError::Unauthorized);
    Ok(())
}

fn require_owner(ledger: &BuyerLedger, caller: &Pubkey) -> Result<()> {
    require!(ledger.initialized, PresaleError::BuyerNotRegistered);
    require_keys_eq!(*caller, ledger.owner, PresaleError::Unauthorized);
    Ok(())
}

pub fn initialize(
    sale: &mut SaleConfig,
    env: &Env,
    caller: &Pubkey,
    params: InitializeParams,
) -> Result<()> {
    require!(!sale.initialized, PresaleError::AlreadyInitialized);
    require_keys_eq!(*caller, params.admin, PresaleError::Unauthorized);
    require!(
        params.treasury != Pubkey::default(),
        PresaleError::InvalidTreasury
    );
    ProgramSigner::from_bump(&env.program_id, params.bump)?;

    sale.initialized = true;
    sale.admin = params.admin;
    sale.token_mint = params.token_mint;
    sale.vault = params.vault;
    sale.treasury = params.treasury;
    sale.unit_price = params.unit_price;
    sale.deadline = 0;
    sale.inventory_deposited = 0;
    sale.tokens_sold = 0;
    sale.outstanding_entitlement = 0;
    sale.total_raised = 0;
    sale.tokens_swept = 0;
    sale.swept = false;
    sale.bump = params.bump;
    sale.vault_bump = params.vault_bump;

    Ok(())
}

/// Moves `amount` tokens from the admin's `source` account into custody.
pub fn fund<T: Transfers>(
    bank: &mut T,
    sale: &mut SaleConfig,
    caller: &Pubkey,
    source: &Pubkey,
    amount: u64,
) -> Result<()> {
    require_admin(sale, caller)?;
    require!(amount > 0, PresaleError::ZeroAmount);
    require!(!sale.swept, PresaleError::SaleClosed);

    let inventory = checked_add(sale.inventory_deposited, amount)?;

    bank.transfer_token(source, &sale.vault, amount, Authority::Wallet(*caller))?;

    sale.inventory_deposited = inventory;
    Ok(())
}

/// No monotonicity: a past timestamp halts sales immediately.
pub fn set_deadline(sale: &mut SaleConfig, caller: &Pubkey, deadline: i64) -> Result<()> {
    require_admin(sale, caller)?;
    sale.deadline = deadline;
    Ok(())
}

pub fn register_buyer(
    ledger: &mut BuyerLedger,
    caller: &Pubkey,
    owner: &Pubkey,
    bump: u8,
) -> Result<()> {
    require!(!ledger.initialized, PresaleError::AlreadyRegistered);
    require_keys_eq!(*caller, *owner, PresaleError::Unauthorized);

    ledger.initialized = true;
    ledger.owner = *owner;
    ledger.entitlement = 0;
    ledger.total_purchased = 0;
    ledger.total_claimed = 0;
    ledger.bump = bump;
    Ok(())
}

/// Pays `payment` lamports to the treasury and credits the resulting token
/// units to the buyer's entitlement. Returns the units credited.
pub fn purchase<T: Transfers>(
    bank: &mut T,
    sale: &mut SaleConfig,
    ledger: &mut BuyerLedger,
    env: &Env,
    caller: &Pubkey,
    payment: u64,
) -> Result<u64> {
    require_initialized(sale)?;
    require_owner(ledger, caller)?;
    require!(
        !sale.swept && is_within_window(env.now, sale.deadline),
        PresaleError::SaleClosed
    );
    require!(payment > 0, PresaleError::ZeroAmount);

    let tokens = tokens_for_payment(payment, sale.unit_price)?;
    require!(tokens > 0, PresaleError::ZeroTokensPurchased);
    require!(
        tokens <= sale.unsold_inventory(),
        PresaleError::InsufficientInventory
    );

    let entitlement = checked_add(ledger.entitlement, tokens)?;
    let total_purchased = checked_add(ledger.total_purchased, tokens)?;
    let tokens_sold = checked_add(sale.tokens_sold, tokens)?;
    let outstanding = checked_add(sale.outstanding_entitlement, tokens)?;
    let total_raised = checked_add(sale.total_raised, payment)?;

    bank.transfer_value(caller, &sale.treasury, payment)?;

    ledger.entitlement = entitlement;
    ledger.total_purchased = total_purchased;
    sale.tokens_sold = tokens_sold;
    sale.outstanding_entitlement = outstanding;
    sale.total_raised = total_raised;

    Ok(tokens)
}

/// Releases the caller's full entitlement from custody to `destination`.
///
/// `custody` is the live token balance of the vault. Returns the units
/// released.
pub fn claim<T: Transfers>(
    bank: &mut T,
    sale: &mut SaleConfig,
    ledger: &mut BuyerLedger,
    env: &Env,
    caller: &Pubkey,
    destination: &Pubkey,
    custody: u64,
) -> Result<u64> {
    require_initialized(sale)?;
    require_owner(ledger, caller)?;

    let amount = ledger.entitlement;
    require!(amount > 0, PresaleError::NothingToClaim);
    if custody < amount {
        msg!(
            "solvency breach: custody {} below entitlement {} of {}",
            custody,
            amount,
            ledger.owner
        );
        return err!(PresaleError::InsufficientCustody);
    }

    let signer = ProgramSigner::from_bump(&env.program_id, sale.bump)?;
    let outstanding = checked_sub(sale.outstanding_entitlement, amount)?;
    let total_claimed = checked_add(ledger.total_claimed, amount)?;

    bank.transfer_token(&sale.vault, destination, amount, Authority::Program(signer))?;

    ledger.entitlement = 0;
    ledger.total_claimed = total_claimed;
    sale.outstanding_entitlement = outstanding;

    Ok(amount)
}

/// Burns everything in custody above the outstanding entitlement once the
/// sale window has closed. Returns the units burned.
pub fn sweep_unsold<T: Transfers>(
    bank: &mut T,
    sale: &mut SaleConfig,
    env: &Env,
    caller: &Pubkey,
    custody: u64,
) -> Result<u64> {
    require_admin(sale, caller)?;
    require!(
        !is_within_window(env.now, sale.deadline),
        PresaleError::SaleStillOpen
    );

    let Some(excess) = custody.checked_sub(sale.outstanding_entitlement) else {
        msg!(
            "solvency breach: custody {} below outstanding entitlement {}",
            custody,
            sale.outstanding_entitlement
        );
        return err!(PresaleError::InsufficientCustody);
    };

    let signer = ProgramSigner::from_bump(&env.program_id, sale.bump)?;
    let tokens_swept = checked_add(sale.tokens_swept, excess)?;

    if excess > 0 {
        bank.burn_token(&sale.vault, excess, signer)?;
        msg!("burned {} unsold units", excess);
    }

    sale.tokens_swept = tokens_swept;
    sale.swept = true;

    Ok(excess)
}
