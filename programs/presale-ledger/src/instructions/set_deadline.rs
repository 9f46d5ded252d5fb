use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::PresaleError;
use crate::events::DeadlineUpdated;
use crate::processor;
use crate::state::*;

pub fn set_deadline(ctx: Context<SetDeadline>, deadline: i64) -> Result<()> {
    let admin = ctx.accounts.admin.key();
    processor::set_deadline(&mut ctx.accounts.sale_config, &admin, deadline)?;

    emit!(DeadlineUpdated { admin, deadline });

    Ok(())
}

#[derive(Accounts)]
pub struct SetDeadline<'info> {
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
}
