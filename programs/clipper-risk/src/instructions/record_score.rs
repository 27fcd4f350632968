use anchor_lang::prelude::*;

use clipper_payout::constants::SUBSCORE_MAX_CENTI;
use clipper_payout::math::delegation_score_deci;

use crate::error::RiskError;
use crate::events::DelegationScored;
use crate::state::{DelegationRecord, RiskConfig};

#[derive(Accounts)]
pub struct RecordScore<'info> {
    pub scorer: Signer<'info>,

    #[account(
        seeds = [b"risk_config"],
        bump = config.bump,
        constraint = config.scorer_authority == scorer.key() @ RiskError::UnauthorizedScorer,
    )]
    pub config: Account<'info, RiskConfig>,

    #[account(
        mut,
        seeds = [b"delegation", record.creator.as_ref()],
        bump = record.bump,
    )]
    pub record: Account<'info, DelegationRecord>,
}

/// Writes a creator's five sub-scores and their composite delegation score.
///
/// Sub-scores outside 0..=500 centi-points indicate upstream data corruption
/// and are rejected, never clamped. The composite formula is the one copy in
/// `clipper_payout::math`, shared with the payout engine's tooling.
pub fn handler(
    ctx: Context<RecordScore>,
    vs_score: u16,
    cc_score: u16,
    hu_score: u16,
    r_score: u16,
    ad_score: u16,
) -> Result<()> {
    for score in [vs_score, cc_score, hu_score, r_score, ad_score] {
        require!(score <= SUBSCORE_MAX_CENTI, RiskError::SubScoreOutOfRange);
    }

    let score_deci = delegation_score_deci(vs_score, cc_score, hu_score, r_score, ad_score)
        .ok_or(RiskError::SubScoreOutOfRange)?;

    let clock = Clock::get()?;
    let record = &mut ctx.accounts.record;
    record.vs_score = vs_score;
    record.cc_score = cc_score;
    record.hu_score = hu_score;
    record.r_score = r_score;
    record.ad_score = ad_score;
    record.score_deci = score_deci;
    record.times_scored = record
        .times_scored
        .checked_add(1)
        .ok_or(RiskError::Overflow)?;
    record.last_scored_at = clock.unix_timestamp;

    emit!(DelegationScored {
        creator: record.creator,
        vs_score,
        cc_score,
        hu_score,
        r_score,
        ad_score,
        score_deci,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
