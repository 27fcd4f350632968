use anchor_lang::prelude::*;

#[event]
pub struct RiskConfigInitialized {
    pub admin: Pubkey,
    pub scorer_authority: Pubkey,
}

#[event]
pub struct CreatorRegistered {
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DelegationScored {
    pub creator: Pubkey,
    pub vs_score: u16,
    pub cc_score: u16,
    pub hu_score: u16,
    pub r_score: u16,
    pub ad_score: u16,
    pub score_deci: u16,
    pub timestamp: i64,
}
