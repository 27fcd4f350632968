//! The payout and risk formulas, consolidated in one place.
//!
//! Every number the engine produces comes through this module: net views,
//! view earnings, monthly bonus tiers, delegation scores and the advisory
//! throttle risk score. Instruction handlers (and the `clipper-risk`
//! program, through a no-entrypoint dependency) call these functions rather
//! than carrying their own copies of the arithmetic.
//!
//! All functions are pure and deterministic over integer inputs. Range
//! validation of caller-supplied values happens at the instruction boundary;
//! functions that can observe out-of-range or overflowing inputs return
//! `Option` and let the handler surface a program error.

use crate::constants::*;
use crate::state::BonusTier;

/// Views attributable to a submission window: `max(0, raw - baseline)`.
///
/// Platform lifetime counts can regress below the stored baseline (API
/// caching, fraud countermeasures pruning views), so a negative delta is an
/// expected condition and clamps to zero rather than erroring.
pub fn net_views(raw_view_count: u64, baseline_view_count: u64) -> u64 {
    raw_view_count.saturating_sub(baseline_view_count)
}

/// Cents earned by `net_views` at `rpm_cents` per 1,000 views.
///
/// Rounds half-up at the cents boundary. A nonzero result below
/// `min_payout_cents` clamps up to the floor; an exact zero stays zero (a
/// clip with no net views earns nothing, not the floor).
///
/// Returns `None` only if the product overflows `u64` cents.
pub fn base_payout_cents(net_views: u64, rpm_cents: u16, min_payout_cents: u32) -> Option<u64> {
    let raw = (net_views as u128)
        .checked_mul(rpm_cents as u128)?
        .checked_add(VIEWS_PER_MILLE as u128 / 2)?
        / VIEWS_PER_MILLE as u128;
    let raw = u64::try_from(raw).ok()?;

    if raw > 0 && raw < min_payout_cents as u64 {
        Some(min_payout_cents as u64)
    } else {
        Some(raw)
    }
}

/// Earnings for a verified clip, with the activation gate applied.
///
/// Below `activation_threshold_views` net views a clip holds zero earnings
/// even though the floored formula would yield a nonzero value; at or above
/// the threshold the clip is activated and earns `base_payout_cents`.
/// Returns `(earnings_cents, is_activated)`.
pub fn clip_earnings_cents(
    net_views: u64,
    rpm_cents: u16,
    min_payout_cents: u32,
    activation_threshold_views: u32,
) -> Option<(u64, bool)> {
    if net_views < activation_threshold_views as u64 {
        return Some((0, false));
    }
    let earnings = base_payout_cents(net_views, rpm_cents, min_payout_cents)?;
    Some((earnings, true))
}

/// Resolves the trailing-month net-view sum into a bonus tier.
///
/// Thresholds are inclusive lower bounds, evaluated highest first; there is
/// no tier beyond Super.
pub fn monthly_bonus(monthly_net_views: u64) -> (BonusTier, u64) {
    if monthly_net_views >= SUPER_TIER_VIEWS {
        (BonusTier::Super, SUPER_TIER_CENTS)
    } else if monthly_net_views >= PROVEN_TIER_VIEWS {
        (BonusTier::Proven, PROVEN_TIER_CENTS)
    } else if monthly_net_views >= VERIFIED_TIER_VIEWS {
        (BonusTier::Verified, VERIFIED_TIER_CENTS)
    } else {
        (BonusTier::None, 0)
    }
}

/// Weighted delegation/trust score in deci-points (0..=1000).
///
/// Sub-scores arrive in centi-points (0..=500). The hu sub-score is a risk
/// signal and enters inverted: `hu = 500` contributes nothing to the score.
/// A consequence worth preserving is that an all-zero row still scores 231
/// deci-points (23.1), because the inverted hu term alone contributes
/// `500 * WEIGHT_HU` of the weighted maximum.
///
/// Returns `None` if any sub-score exceeds `SUBSCORE_MAX_CENTI`; callers
/// reject that as upstream data corruption rather than clamping.
pub fn delegation_score_deci(vs: u16, cc: u16, hu: u16, r: u16, ad: u16) -> Option<u16> {
    for s in [vs, cc, hu, r, ad] {
        if s > SUBSCORE_MAX_CENTI {
            return None;
        }
    }

    let weighted = vs as u32 * WEIGHT_VS
        + cc as u32 * WEIGHT_CC
        + (SUBSCORE_MAX_CENTI - hu) as u32 * WEIGHT_HU
        + r as u32 * WEIGHT_R
        + ad as u32 * WEIGHT_AD;

    // Half-up rounding to one decimal of the 0..=100 scale.
    let deci = (weighted as u64 * SCORE_SCALE_DECI + MAX_WEIGHTED / 2) / MAX_WEIGHTED;
    Some(deci as u16)
}

/// Advisory risk score for the auto-throttle decision.
///
/// Each rolling conversion average (basis points) contributes points from at
/// most one band; bands across metrics are additive and independent. An
/// already-engaged throttle adds a constant weight. The score is advisory
/// display input only; it never flips the throttle by itself.
pub fn throttle_risk_points(
    avg_ctr_bps: u16,
    avg_reg_rate_bps: u16,
    avg_day1_rate_bps: u16,
    throttle_active: bool,
) -> u8 {
    let mut points: u8 = 0;

    if avg_ctr_bps < CTR_CRITICAL_BPS {
        points += CTR_CRITICAL_POINTS;
    } else if avg_ctr_bps < CTR_WARNING_BPS {
        points += CTR_WARNING_POINTS;
    }

    if avg_reg_rate_bps < REG_CRITICAL_BPS {
        points += REG_CRITICAL_POINTS;
    } else if avg_reg_rate_bps < REG_WARNING_BPS {
        points += REG_WARNING_POINTS;
    }

    if avg_day1_rate_bps < DAY1_CRITICAL_BPS {
        points += DAY1_CRITICAL_POINTS;
    } else if avg_day1_rate_bps < DAY1_WARNING_BPS {
        points += DAY1_WARNING_POINTS;
    }

    if throttle_active {
        points += THROTTLE_ACTIVE_POINTS;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_views_is_plain_delta_when_raw_exceeds_baseline() {
        assert_eq!(net_views(5_000, 1_200), 3_800);
        assert_eq!(net_views(1_000, 1_000), 0);
        assert_eq!(net_views(7, 0), 7);
    }

    #[test]
    fn net_views_clamps_platform_regressions_to_zero() {
        assert_eq!(net_views(900, 1_000), 0);
        assert_eq!(net_views(0, u64::MAX), 0);
    }

    #[test]
    fn zero_net_views_earn_nothing_and_never_the_floor() {
        assert_eq!(base_payout_cents(0, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS), Some(0));
        assert_eq!(base_payout_cents(0, PROTECTION_RPM_CENTS, MIN_PAYOUT_CENTS), Some(0));
    }

    #[test]
    fn small_nonzero_payouts_clamp_to_the_floor() {
        // 100 views at $0.22 RPM is 2.2 cents raw, floored to $2.22.
        assert_eq!(
            base_payout_cents(100, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS),
            Some(222)
        );
        // One view below the floor boundary still floors.
        assert_eq!(
            base_payout_cents(10_000, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS),
            Some(222)
        );
    }

    #[test]
    fn payouts_above_the_floor_are_untouched() {
        assert_eq!(
            base_payout_cents(100_000, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS),
            Some(2_200)
        );
        assert_eq!(
            base_payout_cents(1_000_000, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS),
            Some(22_000)
        );
    }

    #[test]
    fn payout_rounds_half_up_at_the_cents_boundary() {
        // 1,023 views * 22 = 22,506 milli-cents -> 23 cents -> floored.
        assert_eq!(
            base_payout_cents(1_023, DEFAULT_RPM_CENTS, 0),
            Some(23)
        );
        // 1,022 views * 22 = 22,484 -> 22 cents.
        assert_eq!(base_payout_cents(1_022, DEFAULT_RPM_CENTS, 0), Some(22));
    }

    #[test]
    fn protection_rpm_pays_less_than_default_rpm() {
        for views in [50_000u64, 123_456, 1_000_000] {
            let throttled =
                base_payout_cents(views, PROTECTION_RPM_CENTS, MIN_PAYOUT_CENTS).unwrap();
            let normal = base_payout_cents(views, DEFAULT_RPM_CENTS, MIN_PAYOUT_CENTS).unwrap();
            assert!(throttled < normal, "views={views}");
        }
    }

    #[test]
    fn payout_overflow_is_reported_not_wrapped() {
        assert_eq!(base_payout_cents(u64::MAX, u16::MAX, 0), None);
    }

    #[test]
    fn activation_gate_holds_earnings_at_zero_below_threshold() {
        let (cents, activated) = clip_earnings_cents(
            999,
            DEFAULT_RPM_CENTS,
            MIN_PAYOUT_CENTS,
            ACTIVATION_THRESHOLD_VIEWS,
        )
        .unwrap();
        assert_eq!(cents, 0);
        assert!(!activated);
    }

    #[test]
    fn activation_threshold_is_inclusive() {
        let (cents, activated) = clip_earnings_cents(
            1_000,
            DEFAULT_RPM_CENTS,
            MIN_PAYOUT_CENTS,
            ACTIVATION_THRESHOLD_VIEWS,
        )
        .unwrap();
        // 1,000 views at $0.22 is 22 cents raw, floored to $2.22.
        assert_eq!(cents, 222);
        assert!(activated);
    }

    #[test]
    fn monthly_bonus_tier_bounds_are_inclusive() {
        assert_eq!(monthly_bonus(99_999), (BonusTier::None, 0));
        assert_eq!(monthly_bonus(100_000), (BonusTier::Verified, 11_100));
        assert_eq!(monthly_bonus(499_999), (BonusTier::Verified, 11_100));
        assert_eq!(monthly_bonus(500_000), (BonusTier::Proven, 44_400));
        assert_eq!(monthly_bonus(1_000_000), (BonusTier::Super, 111_100));
    }

    #[test]
    fn monthly_bonus_never_extrapolates_past_super() {
        assert_eq!(monthly_bonus(2_000_000), (BonusTier::Super, 111_100));
        assert_eq!(monthly_bonus(u64::MAX), (BonusTier::Super, 111_100));
    }

    #[test]
    fn all_zero_sub_scores_keep_the_inverted_hu_baseline() {
        // hu = 0 contributes its full inverted weight, so the floor of the
        // score range is 23.1, not 0.
        assert_eq!(delegation_score_deci(0, 0, 0, 0, 0), Some(231));
    }

    #[test]
    fn best_possible_row_scores_one_hundred() {
        assert_eq!(delegation_score_deci(500, 500, 0, 500, 500), Some(1_000));
    }

    #[test]
    fn maximum_hu_risk_zeroes_its_term() {
        assert_eq!(delegation_score_deci(0, 0, 500, 0, 0), Some(0));
    }

    #[test]
    fn vs_and_ad_carry_equal_weight() {
        assert_eq!(
            delegation_score_deci(500, 0, 500, 0, 0),
            delegation_score_deci(0, 0, 500, 0, 500)
        );
    }

    #[test]
    fn weight_ordering_is_vs_over_cc_over_r() {
        // Hold hu at max so only the varied term contributes.
        let vs = delegation_score_deci(500, 0, 500, 0, 0).unwrap();
        let cc = delegation_score_deci(0, 500, 500, 0, 0).unwrap();
        let r = delegation_score_deci(0, 0, 500, 500, 0).unwrap();
        assert!(vs > cc && cc > r, "vs={vs} cc={cc} r={r}");
    }

    #[test]
    fn out_of_range_sub_scores_are_rejected_not_clamped() {
        assert_eq!(delegation_score_deci(501, 0, 0, 0, 0), None);
        assert_eq!(delegation_score_deci(0, 0, u16::MAX, 0, 0), None);
    }

    #[test]
    fn delegation_score_is_deterministic() {
        let a = delegation_score_deci(350, 275, 120, 440, 390);
        let b = delegation_score_deci(350, 275, 120, 440, 390);
        assert_eq!(a, b);
    }

    #[test]
    fn healthy_rolling_averages_accumulate_no_points() {
        assert_eq!(throttle_risk_points(150, 2_000, 3_000, false), 0);
    }

    #[test]
    fn each_metric_contributes_from_one_band_only() {
        // ctr in the warning band, reg in the critical band, day1 healthy.
        assert_eq!(throttle_risk_points(90, 900, 3_000, false), 15 + 30);
        // Critical ctr does not also count its warning band.
        assert_eq!(throttle_risk_points(79, 2_000, 3_000, false), 30);
    }

    #[test]
    fn band_edges_are_exclusive_upper_bounds() {
        assert_eq!(throttle_risk_points(80, 2_000, 3_000, false), 15);
        assert_eq!(throttle_risk_points(100, 2_000, 3_000, false), 0);
        assert_eq!(throttle_risk_points(150, 1_000, 3_000, false), 15);
        assert_eq!(throttle_risk_points(150, 1_500, 3_000, false), 0);
        assert_eq!(throttle_risk_points(150, 2_000, 2_000, false), 10);
        assert_eq!(throttle_risk_points(150, 2_000, 2_500, false), 0);
    }

    #[test]
    fn active_throttle_adds_its_constant_weight() {
        assert_eq!(throttle_risk_points(150, 2_000, 3_000, true), 15);
        assert_eq!(
            throttle_risk_points(0, 0, 0, true),
            30 + 30 + 25 + 15
        );
    }
}
