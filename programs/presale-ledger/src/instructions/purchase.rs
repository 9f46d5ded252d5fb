use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events::TokensPurchased;
use crate::instructions::transfer_cpi::CpiTransfers;
use crate::math::forfeited_remainder;
use crate::processor::{self, Env};
use crate::state::*;

pub fn purchase(ctx: Context<Purchase>, payment: u64) -> Result<()> {
    let env = Env::new(ctx.program_id, Clock::get()?.unix_timestamp);
    let mut bank = CpiTransfers::new()
        .with_system_program(ctx.accounts.system_program.to_account_info())
        .with_account(ctx.accounts.buyer.to_account_info())
        .with_account(ctx.accounts.treasury.to_account_info());

    let accounts = &mut *ctx.accounts;
    let buyer = accounts.buyer.key();
    let tokens = processor::purchase(
        &mut bank,
        &mut accounts.sale_config,
        &mut accounts.buyer_ledger,
        &env,
        &buyer,
        payment,
    )?;

    emit!(TokensPurchased {
        buyer,
        payment,
        tokens,
        forfeited: forfeited_remainder(payment, accounts.sale_config.unit_price)?,
        entitlement: accounts.buyer_ledger.entitlement,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Purchase<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_SALE_CONFIG],
        bump = sale_config.bump,
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [SEED_BUYER_LEDGER, buyer.key().as_ref()],
        bump = buyer_ledger.bump,
    )]
    pub buyer_ledger: Account<'info, BuyerLedger>,

    /// CHECK: validated against sale_config.treasury
    #[account(
        mut,
        address = sale_config.treasury @ PresaleError::InvalidTreasury
    )]
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
