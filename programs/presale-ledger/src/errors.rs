use anchor_lang::prelude::*;

#[error_code]
pub enum PresaleError {
    #[msg("Caller is not allowed to perform this operation")]
    Unauthorized,
    #[msg("Sale configuration is already initialized")]
    AlreadyInitialized,
    #[msg("Buyer ledger is already registered")]
    AlreadyRegistered,
    #[msg("Sale configuration is not initialized")]
    NotInitialized,
    #[msg("Buyer ledger is not registered")]
    BuyerNotRegistered,
    #[msg("Sale is closed")]
    SaleClosed,
    #[msg("Sale is still open")]
    SaleStillOpen,
    #[msg("Unit price is zero")]
    DivisionByZero,
    #[msg("Payment is too small to buy a single token unit")]
    ZeroTokensPurchased,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Custody holds less than the outstanding entitlement")]
    InsufficientCustody,
    #[msg("Not enough unsold inventory for this purchase")]
    InsufficientInventory,
    #[msg("Treasury cannot be the default address")]
    InvalidTreasury,
    #[msg("Invalid token mint")]
    InvalidTokenMint,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Program signer does not match the sale configuration address")]
    InvalidProgramSigner,
    #[msg("Account required for the transfer was not supplied")]
    UnknownAccount,
}
