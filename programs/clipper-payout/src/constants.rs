//! Engine-wide tunables and formula constants.
//!
//! Rates and money are integer-denominated throughout: cents for money,
//! cents-per-mille for RPM, basis points for conversion rates, centi-points
//! for delegation sub-scores and deci-points for the delegation score.
//! `EngineConfig` carries the payout tunables on-chain; the values here are
//! the defaults an admin initializes with.

// Payout defaults
pub const DEFAULT_RPM_CENTS: u16 = 22; // $0.22 per 1,000 views
pub const PROTECTION_RPM_CENTS: u16 = 18; // $0.18 while the throttle is engaged
pub const MIN_PAYOUT_CENTS: u32 = 222; // $2.22 floor for any nonzero payout
pub const ACTIVATION_THRESHOLD_VIEWS: u32 = 1_000;

/// Divisor for the per-mille RPM rate.
pub const VIEWS_PER_MILLE: u64 = 1_000;

// Monthly bonus tiers, evaluated highest threshold first.
// Thresholds are inclusive lower bounds on trailing-month net views.
pub const SUPER_TIER_VIEWS: u64 = 1_000_000;
pub const SUPER_TIER_CENTS: u64 = 111_100; // $1,111
pub const PROVEN_TIER_VIEWS: u64 = 500_000;
pub const PROVEN_TIER_CENTS: u64 = 44_400; // $444
pub const VERIFIED_TIER_VIEWS: u64 = 100_000;
pub const VERIFIED_TIER_CENTS: u64 = 11_100; // $111

// Delegation score weights, in hundredths. The hu (human-unverified) signal
// is inverted in the formula: a higher hu sub-score lowers the final score.
pub const WEIGHT_VS: u32 = 30; // view-source quality
pub const WEIGHT_CC: u32 = 25; // content compliance
pub const WEIGHT_HU: u32 = 30; // human-unverified risk, inverted
pub const WEIGHT_R: u32 = 15; // retention
pub const WEIGHT_AD: u32 = 30; // ad safety / brand

/// Sub-scores are centi-points in 0..=500 (0.00 to 5.00).
pub const SUBSCORE_MAX_CENTI: u16 = 500;

/// Weighted maximum: a perfect sub-score row sums to 500 * 130.
pub const MAX_WEIGHTED: u64 =
    SUBSCORE_MAX_CENTI as u64 * (WEIGHT_VS + WEIGHT_CC + WEIGHT_HU + WEIGHT_R + WEIGHT_AD) as u64;

/// Delegation scores are deci-points in 0..=1000 (0.0 to 100.0).
pub const SCORE_SCALE_DECI: u64 = 1_000;

// Auto-throttle advisory bands. Rolling conversion averages arrive in basis
// points; each metric contributes points from at most one band.
pub const MAX_RATE_BPS: u16 = 10_000;

pub const CTR_CRITICAL_BPS: u16 = 80; // 0.8% click-through
pub const CTR_CRITICAL_POINTS: u8 = 30;
pub const CTR_WARNING_BPS: u16 = 100; // 1.0%
pub const CTR_WARNING_POINTS: u8 = 15;

pub const REG_CRITICAL_BPS: u16 = 1_000; // 10% registration
pub const REG_CRITICAL_POINTS: u8 = 30;
pub const REG_WARNING_BPS: u16 = 1_500; // 15%
pub const REG_WARNING_POINTS: u8 = 15;

pub const DAY1_CRITICAL_BPS: u16 = 2_000; // 20% day-1 retention
pub const DAY1_CRITICAL_POINTS: u8 = 25;
pub const DAY1_WARNING_BPS: u16 = 2_500; // 25%
pub const DAY1_WARNING_POINTS: u8 = 10;

/// Extra weight while the throttle is already engaged.
pub const THROTTLE_ACTIVE_POINTS: u8 = 15;
