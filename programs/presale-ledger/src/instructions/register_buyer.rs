use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::BuyerRegistered;
use crate::processor;
use crate::state::*;

pub fn register_buyer(ctx: Context<RegisterBuyer>) -> Result<()> {
    let buyer = ctx.accounts.buyer.key();
    processor::register_buyer(
        &mut ctx.accounts.buyer_ledger,
        &buyer,
        &buyer,
        ctx.bumps.buyer_ledger,
    )?;

    emit!(BuyerRegistered {
        owner: buyer,
        ledger: ctx.accounts.buyer_ledger.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterBuyer<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    // Re-registration is rejected by the handler, never re-zeroed
    #[account(
        init_if_needed,
        payer = buyer,
        space = BuyerLedger::LEN,
        seeds = [SEED_BUYER_LEDGER, buyer.key().as_ref()],
        bump
    )]
    pub buyer_ledger: Account<'info, BuyerLedger>,

    pub system_program: Program<'info, System>,
}
