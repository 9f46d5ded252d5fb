use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod processor;
pub mod state;
pub mod transfers;

#[cfg(test)]
mod test_utils;

pub use instructions::*;

declare_id!("DdDTBagXzY9hVWxD9kqfJ9Jr4S4gvUVU3az8K74az4T3");

#[program]
pub mod presale_ledger {
    use super::*;

    /// Creates the sale configuration and its custody vault.
    ///
    /// The signer becomes the admin. Admin, mint and treasury are fixed
    /// from here on; a second call fails with `AlreadyInitialized`.
    pub fn initialize(ctx: Context<Initialize>, unit_price: u64) -> Result<()> {
        instructions::initialize(ctx, unit_price)
    }

    /// Moves `amount` tokens from the admin into custody.
    pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
        instructions::fund(ctx, amount)
    }

    /// Sets the timestamp at which purchases stop being accepted.
    ///
    /// Any value is accepted; a past timestamp closes the sale immediately.
    pub fn set_deadline(ctx: Context<SetDeadline>, deadline: i64) -> Result<()> {
        instructions::set_deadline(ctx, deadline)
    }

    /// Creates the signer's buyer ledger with zero entitlement.
    pub fn register_buyer(ctx: Context<RegisterBuyer>) -> Result<()> {
        instructions::register_buyer(ctx)
    }

    /// Pays `payment` lamports to the treasury for `payment / unit_price`
    /// token units, credited to the buyer's entitlement.
    ///
    /// # Remainder
    /// `payment % unit_price` is not refunded.
    ///
    /// # Replays
    /// The program keeps no purchase nonce. Two identical submissions are
    /// two purchases unless the runtime rejects the duplicate signature.
    pub fn purchase(ctx: Context<Purchase>, payment: u64) -> Result<()> {
        instructions::purchase(ctx, payment)
    }

    /// Releases the signer's whole entitlement from custody.
    ///
    /// The vault transfer is signed by the sale config PDA.
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim(ctx)
    }

    /// Burns custody in excess of outstanding entitlement after the deadline.
    pub fn sweep_unsold(ctx: Context<SweepUnsold>) -> Result<()> {
        instructions::sweep_unsold(ctx)
    }
}
