use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events::TokensClaimed;
use crate::instructions::transfer_cpi::CpiTransfers;
use crate::processor::{self, Env};
use crate::state::*;

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let env = Env::new(ctx.program_id, Clock::get()?.unix_timestamp);
    let mut bank = CpiTransfers::new()
        .with_token_program(ctx.accounts.token_program.to_account_info())
        .with_account(ctx.accounts.sale_vault.to_account_info())
        .with_account(ctx.accounts.buyer_token_account.to_account_info())
        .with_account(ctx.accounts.sale_config.to_account_info());

    let accounts = &mut *ctx.accounts;
    let buyer = accounts.buyer.key();
    let custody = accounts.sale_vault.amount;
    let amount = processor::claim(
        &mut bank,
        &mut accounts.sale_config,
        &mut accounts.buyer_ledger,
        &env,
        &buyer,
        &accounts.buyer_token_account.key(),
        custody,
    )?;

    emit!(TokensClaimed {
        buyer,
        amount,
        total_claimed: accounts.buyer_ledger.total_claimed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Claim<'info> {
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

    #[account(
        mut,
        seeds = [SEED_SALE_VAULT, sale_config.key().as_ref()],
        bump = sale_config.vault_bump,
    )]
    pub sale_vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = buyer,
        associated_token::mint = token_mint,
        associated_token::authority = buyer,
    )]
    pub buyer_token_account: Account<'info, TokenAccount>,

    #[account(
        address = sale_config.token_mint @ PresaleError::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}
