use anchor_lang::prelude::*;

#[event]
pub struct SaleInitialized {
    pub admin: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub vault: Pubkey,
    pub unit_price: u64,
}

#[event]
pub struct InventoryFunded {
    pub admin: Pubkey,
    pub amount: u64,
    pub inventory_deposited: u64,
}

#[event]
pub struct DeadlineUpdated {
    pub admin: Pubkey,
    pub deadline: i64,
}

#[event]
pub struct BuyerRegistered {
    pub owner: Pubkey,
    pub ledger: Pubkey,
}

#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub payment: u64,
    pub tokens: u64,
    /// Lamports paid beyond the last whole token unit
    pub forfeited: u64,
    pub entitlement: u64,
}

#[event]
pub struct TokensClaimed {
    pub buyer: Pubkey,
    pub amount: u64,
    pub total_claimed: u64,
}

#[event]
pub struct UnsoldSwept {
    pub admin: Pubkey,
    pub burned: u64,
    pub outstanding_entitlement: u64,
}
