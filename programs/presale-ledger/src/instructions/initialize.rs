use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::SaleInitialized;
use crate::processor::{self, Env, InitializeParams};
use crate::state::*;

pub fn initialize(ctx: Context<Initialize>, unit_price: u64) -> Result<()> {
    let env = Env::new(ctx.program_id, Clock::get()?.unix_timestamp);
    let accounts = &mut *ctx.accounts;
    let admin = accounts.admin.key();

    let params = InitializeParams {
        admin,
        token_mint: accounts.token_mint.key(),
        treasury: accounts.treasury.key(),
        vault: accounts.sale_vault.key(),
        unit_price,
        bump: ctx.bumps.sale_config,
        vault_bump: ctx.bumps.sale_vault,
    };
    processor::initialize(&mut accounts.sale_config, &env, &admin, params)?;

    emit!(SaleInitialized {
        admin,
        token_mint: params.token_mint,
        treasury: params.treasury,
        vault: params.vault,
        unit_price,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // init_if_needed so a repeated call reaches the AlreadyInitialized guard
    #[account(
        init_if_needed,
        payer = admin,
        space = SaleConfig::LEN,
        seeds = [SEED_SALE_CONFIG],
        bump
    )]
    pub sale_config: Account<'info, SaleConfig>,

    /// The token being sold (must already exist)
    pub token_mint: Account<'info, Mint>,

    /// Custody account; its token authority is the sale config PDA
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [SEED_SALE_VAULT, sale_config.key().as_ref()],
        bump,
        token::mint = token_mint,
        token::authority = sale_config,
    )]
    pub sale_vault: Account<'info, TokenAccount>,

    /// CHECK: only the address is recorded; it receives lamports on purchase
    pub treasury: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}
