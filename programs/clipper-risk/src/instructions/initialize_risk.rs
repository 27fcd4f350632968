use anchor_lang::prelude::*;

use crate::events::RiskConfigInitialized;
use crate::state::RiskConfig;

#[derive(Accounts)]
pub struct InitializeRisk<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = RiskConfig::SIZE,
        seeds = [b"risk_config"],
        bump,
    )]
    pub config: Account<'info, RiskConfig>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRisk>, scorer_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.scorer_authority = scorer_authority;
    config.bump = ctx.bumps.config;

    emit!(RiskConfigInitialized {
        admin: config.admin,
        scorer_authority,
    });

    Ok(())
}
