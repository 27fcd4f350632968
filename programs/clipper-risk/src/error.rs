use anchor_lang::prelude::*;

#[error_code]
pub enum RiskError {
    #[msg("Unauthorized scorer authority")]
    UnauthorizedScorer,
    #[msg("Sub-score exceeds 500 centi-points")]
    SubScoreOutOfRange,
    #[msg("Arithmetic overflow")]
    Overflow,
}
