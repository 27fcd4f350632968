pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("6ahnuj65QFVds3gCzicgbP5Phr9tEDgvYU67c4ULkoPY");

/// Clipper Risk Program
///
/// Per-creator delegation/trust scoring. The risk-aggregation crank writes
/// five weighted conversion-quality sub-scores per creator; the composite
/// 0-100 score (stored in deci-points) is computed by the consolidated
/// formula in `clipper_payout::math`, so the payout engine and this program
/// can never drift apart on the weights.
#[program]
pub mod clipper_risk {
    use super::*;

    pub fn initialize_risk(ctx: Context<InitializeRisk>, scorer_authority: Pubkey) -> Result<()> {
        initialize_risk::handler(ctx, scorer_authority)
    }

    pub fn register_creator(ctx: Context<RegisterCreator>, creator: Pubkey) -> Result<()> {
        register_creator::handler(ctx, creator)
    }

    pub fn record_score(
        ctx: Context<RecordScore>,
        vs_score: u16,
        cc_score: u16,
        hu_score: u16,
        r_score: u16,
        ad_score: u16,
    ) -> Result<()> {
        record_score::handler(ctx, vs_score, cc_score, hu_score, r_score, ad_score)
    }
}
