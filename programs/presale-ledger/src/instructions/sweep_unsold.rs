use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events::UnsoldSwept;
use crate::instructions::transfer_cpi::CpiTransfers;
use crate::processor::{self, Env};
use crate::state::*;

pub fn sweep_unsold(ctx: Context<SweepUnsold>) -> Result<()> {
    let env = Env::new(ctx.program_id, Clock::get()?.unix_timestamp);
    let mut bank = CpiTransfers::new()
        .with_token_program(ctx.accounts.token_program.to_account_info())
        .with_mint(ctx.accounts.token_mint.to_account_info())
        .with_account(ctx.accounts.sale_vault.to_account_info())
        .with_account(ctx.accounts.sale_config.to_account_info());

    let accounts = &mut *ctx.accounts;
    let admin = accounts.admin.key();
    let custody = accounts.sale_vault.amount;
    let burned = processor::sweep_unsold(&mut bank, &mut accounts.sale_config, &env, &admin, custody)?;

    emit!(UnsoldSwept {
        admin,
        burned,
        outstanding_entitlement: accounts.sale_config.outstanding_entitlement,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SweepUnsold<'info> {
    #[account(
        constraint = admin.key() == sale_config.admin @ PresaleError::Unauthorized
    )]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [SEED_SALE_CONFIG],
        bump = sale_config.bump,
    )]
    pub sale_config: Account<'info, SaleConfig>,

    #[account(
        mut,
        seeds = [SEED_SALE_VAULT, sale_config.key().as_ref()],
        bump = sale_config.vault_bump,
    )]
    pub sale_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = sale_config.token_mint @ PresaleError::InvalidTokenMint
    )]
    pub token_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}
