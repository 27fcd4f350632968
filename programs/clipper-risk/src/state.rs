use anchor_lang::prelude::*;

#[account]
pub struct RiskConfig {
    pub admin: Pubkey,
    /// The risk-aggregation crank allowed to write delegation scores
    pub scorer_authority: Pubkey,
    pub bump: u8,
}

impl RiskConfig {
    pub const SIZE: usize = 8  // discriminator
        + 32  // admin
        + 32  // scorer_authority
        + 1;  // bump
}

/// Latest delegation/trust score for one creator.
///
/// Sub-scores are centi-points (0..=500); the composite score is deci-points
/// (0..=1000), one decimal of the 0-100 scale. The hu sub-score is a risk
/// signal and enters the formula inverted.
#[account]
pub struct DelegationRecord {
    pub creator: Pubkey,
    /// View-source quality
    pub vs_score: u16,
    /// Content compliance
    pub cc_score: u16,
    /// Human-unverified risk (inverted in the formula)
    pub hu_score: u16,
    /// Retention
    pub r_score: u16,
    /// Ad safety / brand
    pub ad_score: u16,
    /// Composite weighted score in deci-points
    pub score_deci: u16,
    pub times_scored: u32,
    pub last_scored_at: i64,
    pub bump: u8,
}

impl DelegationRecord {
    pub const SIZE: usize = 8  // discriminator
        + 32  // creator
        + 2   // vs_score
        + 2   // cc_score
        + 2   // hu_score
        + 2   // r_score
        + 2   // ad_score
        + 2   // score_deci
        + 4   // times_scored
        + 8   // last_scored_at
        + 1;  // bump
}
