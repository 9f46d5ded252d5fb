use anchor_lang::prelude::*;

/// Seed for the singleton sale configuration PDA
#[constant]
pub const SEED_SALE_CONFIG: &[u8] = b"sale_config";
/// Seed for per-buyer ledger PDAs (followed by the buyer's key)
#[constant]
pub const SEED_BUYER_LEDGER: &[u8] = b"buyer_ledger";
/// Seed for the custody token account (followed by the sale config key)
#[constant]
pub const SEED_SALE_VAULT: &[u8] = b"sale_vault";
