use anchor_lang::prelude::*;

use crate::error::RiskError;
use crate::events::CreatorRegistered;
use crate::state::{DelegationRecord, RiskConfig};

#[derive(Accounts)]
#[instruction(creator: Pubkey)]
pub struct RegisterCreator<'info> {
    #[account(mut)]
    pub scorer: Signer<'info>,

    #[account(
        seeds = [b"risk_config"],
        bump = config.bump,
        constraint = config.scorer_authority == scorer.key() @ RiskError::UnauthorizedScorer,
    )]
    pub config: Account<'info, RiskConfig>,

    #[account(
        init,
        payer = scorer,
        space = DelegationRecord::SIZE,
        seeds = [b"delegation", creator.as_ref()],
        bump,
    )]
    pub record: Account<'info, DelegationRecord>,

    pub system_program: Program<'info, System>,
}

/// Creates an empty delegation record for a creator ahead of scoring.
pub fn handler(ctx: Context<RegisterCreator>, creator: Pubkey) -> Result<()> {
    let record = &mut ctx.accounts.record;
    record.creator = creator;
    record.vs_score = 0;
    record.cc_score = 0;
    record.hu_score = 0;
    record.r_score = 0;
    record.ad_score = 0;
    record.score_deci = 0;
    record.times_scored = 0;
    record.last_scored_at = 0;
    record.bump = ctx.bumps.record;

    emit!(CreatorRegistered {
        creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
