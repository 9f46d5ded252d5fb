use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events::InventoryFunded;
use crate::instructions::transfer_cpi::CpiTransfers;
use crate::processor;
use crate::state::*;

pub fn fund(ctx: Context<Fund>, amount: u64) -> Result<()> {
    let mut bank = CpiTransfers::new()
        .with_token_program(ctx.accounts.token_program.to_account_info())
        .with_account(ctx.accounts.admin_token_account.to_account_info())
        .with_account(ctx.accounts.sale_vault.to_account_info())
        .with_account(ctx.accounts.admin.to_account_info());

    let accounts = &mut *ctx.accounts;
    let admin = accounts.admin.key();
    processor::fund(
        &mut bank,
        &mut accounts.sale_config,
        &admin,
        &accounts.admin_token_account.key(),
        amount,
    )?;

    emit!(InventoryFunded {
        admin,
        amount,
        inventory_deposited: accounts.sale_config.inventory_deposited,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Fund<'info> {
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
        constraint = admin_token_account.owner == admin.key() @ PresaleError::InvalidTokenAccount,
        constraint = admin_token_account.mint == sale_config.token_mint @ PresaleError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [SEED_SALE_VAULT, sale_config.key().as_ref()],
        bump = sale_config.vault_bump,
    )]
    pub sale_vault: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
