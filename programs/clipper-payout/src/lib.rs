use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;

use instructions::*;
use state::Platform;

declare_id!("9ycpWj1bofCJtkf8uuVwWmxvweAc9zTgSnnpL2mthJsJ");

/// Clipper Payout Program
///
/// The payout engine for the clipper (content creator) program:
/// - Clip submission, verification and rejection
/// - Oracle-driven view polling and view-based earnings in cents
/// - Monthly bonus tiers over trailing-month net views
/// - The system-wide RPM risk throttle and its advisory risk score
/// - Payout finalization ledgering
///
/// All earnings arithmetic lives in the `math` module so the formulas exist
/// exactly once; display layers and off-chain jobs read the same accounts
/// this program writes.
///
/// # Authorities
///
/// Instructions that write view counts, risk metrics, bonuses or payouts
/// require the oracle authority recorded in `EngineConfig`; the throttle
/// transition requires the engine admin. Both are validated through account
/// constraints on the config PDA, so a signer can never substitute its own
/// configuration.
#[program]
pub mod clipper_payout {
    use super::*;

    /// Initialize the engine config and the throttle singleton
    ///
    /// One-time setup. The signer becomes the admin; the oracle authority
    /// and every payout tunable are recorded on-chain rather than baked
    /// into the program.
    pub fn initialize_engine(
        ctx: Context<InitializeEngine>,
        oracle_authority: Pubkey,
        default_rpm_cents: u16,
        protection_rpm_cents: u16,
        min_payout_cents: u32,
        activation_threshold_views: u32,
    ) -> Result<()> {
        instructions::initialize_engine::initialize_engine(
            ctx,
            oracle_authority,
            default_rpm_cents,
            protection_rpm_cents,
            min_payout_cents,
            activation_threshold_views,
        )
    }

    /// Initialize a creator's earnings vault
    ///
    /// Each creator can only have one vault.
    pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
        instructions::initialize_vault::initialize_vault(ctx)
    }

    /// Submit a clip for tracking
    ///
    /// Creates a Pending submission with no baseline. Earnings stay zero
    /// until verification and activation.
    pub fn submit_clip(
        ctx: Context<SubmitClip>,
        submission_id: [u8; 16],
        platform: Platform,
    ) -> Result<()> {
        instructions::submit_clip::submit_clip(ctx, submission_id, platform)
    }

    /// Verify a pending clip and fix its view baseline
    ///
    /// Oracle only. The observed lifetime view count becomes the permanent
    /// baseline for net-view attribution.
    pub fn verify_clip(ctx: Context<VerifyClip>, observed_view_count: u64) -> Result<()> {
        instructions::verify_clip::verify_clip(ctx, observed_view_count)
    }

    /// Reject a pending clip (terminal)
    ///
    /// Oracle only.
    pub fn reject_clip(ctx: Context<RejectClip>) -> Result<()> {
        instructions::reject_clip::reject_clip(ctx)
    }

    /// Record a polled view count and recompute the clip's earnings
    ///
    /// Oracle only. Reads the throttle singleton to pick the effective RPM;
    /// applies the activation gate and the minimum-payout floor; adjusts the
    /// creator vault by the earnings delta.
    pub fn record_views(ctx: Context<RecordViews>, raw_view_count: u64) -> Result<()> {
        instructions::record_views::record_views(ctx, raw_view_count)
    }

    /// Settle a creator's monthly bonus from the trailing-month view sum
    ///
    /// Oracle only. The (creator, month) record PDA guarantees a month
    /// settles at most once.
    pub fn settle_monthly_bonus(
        ctx: Context<SettleMonthlyBonus>,
        month_index: u32,
        monthly_net_views: u64,
    ) -> Result<()> {
        instructions::settle_monthly_bonus::settle_monthly_bonus(
            ctx,
            month_index,
            monthly_net_views,
        )
    }

    /// Record rolling conversion averages and the advisory risk score
    ///
    /// Oracle only. Advisory: never engages the throttle by itself.
    pub fn record_risk_metrics(
        ctx: Context<RecordRiskMetrics>,
        avg_ctr_bps: u16,
        avg_reg_rate_bps: u16,
        avg_day1_rate_bps: u16,
    ) -> Result<()> {
        instructions::record_risk_metrics::record_risk_metrics(
            ctx,
            avg_ctr_bps,
            avg_reg_rate_bps,
            avg_day1_rate_bps,
        )
    }

    /// Engage or release the system-wide RPM throttle
    ///
    /// Admin only.
    pub fn set_throttle(
        ctx: Context<SetThrottle>,
        activate: bool,
        rpm_override_cents: u16,
    ) -> Result<()> {
        instructions::set_throttle::set_throttle(ctx, activate, rpm_override_cents)
    }

    /// Record a finalized off-chain payout against a creator's vault
    ///
    /// Oracle only. Cannot exceed the unpaid balance.
    pub fn record_payout(ctx: Context<RecordPayout>, amount_cents: u64) -> Result<()> {
        instructions::record_payout::record_payout(ctx, amount_cents)
    }
}
