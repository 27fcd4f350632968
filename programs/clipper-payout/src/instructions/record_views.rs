use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::math;
use crate::state::{ClipStatus, ClipSubmission, CreatorVault, EngineConfig, ThrottleState};

/// Records a polled view count and recomputes earnings
///
/// Called by the oracle authority once per clip per polling cycle. Net views
/// are clamped at zero when the platform count regresses below the baseline.
/// The clip activates once net views reach the configured threshold and stays
/// activated; until then earnings are held at zero even though the floored
/// formula would already yield a nonzero value.
///
/// The effective RPM comes from the throttle account when it is engaged,
/// otherwise from the engine config, so a system-wide throttle takes effect
/// on the very next poll of every clip.
pub fn record_views(ctx: Context<RecordViews>, raw_view_count: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let throttle = &ctx.accounts.throttle;

    let clip = &mut ctx.accounts.clip;
    require!(
        clip.status == ClipStatus::Verified,
        PayoutError::ClipNotVerified
    );

    let clock = Clock::get()?;
    let net_views = math::net_views(raw_view_count, clip.baseline_view_count);

    let rpm_cents = if throttle.is_active {
        throttle.rpm_override_cents
    } else {
        config.default_rpm_cents
    };

    // Activation latches: a clip that crossed the threshold keeps earning
    // through the floored formula even if the platform count later regresses.
    let (earnings_cents, is_activated) = if clip.is_activated {
        let cents = math::base_payout_cents(net_views, rpm_cents, config.min_payout_cents)
            .ok_or(PayoutError::ArithmeticOverflow)?;
        (cents, true)
    } else {
        math::clip_earnings_cents(
            net_views,
            rpm_cents,
            config.min_payout_cents,
            config.activation_threshold_views,
        )
        .ok_or(PayoutError::ArithmeticOverflow)?
    };
    let newly_activated = is_activated && !clip.is_activated;

    // Earnings recompute from scratch each poll, so the vault is adjusted
    // by the delta; a view regression can move it down, never below zero.
    let vault = &mut ctx.accounts.vault;
    if earnings_cents >= clip.earnings_cents {
        vault.total_earned_cents = vault
            .total_earned_cents
            .checked_add(earnings_cents - clip.earnings_cents)
            .ok_or(PayoutError::ArithmeticOverflow)?;
    } else {
        vault.total_earned_cents = vault
            .total_earned_cents
            .checked_sub(clip.earnings_cents - earnings_cents)
            .ok_or(PayoutError::ArithmeticOverflow)?;
    }

    clip.raw_view_count = raw_view_count;
    clip.earnings_cents = earnings_cents;
    clip.is_activated = is_activated;
    clip.last_polled_at = clock.unix_timestamp;

    if newly_activated {
        emit!(ClipActivated {
            creator: clip.creator,
            submission_id: clip.submission_id,
            net_views,
            timestamp: clock.unix_timestamp,
        });
    }

    emit!(ViewsRecorded {
        creator: clip.creator,
        submission_id: clip.submission_id,
        raw_view_count,
        net_views,
        earnings_cents,
        rpm_cents,
        throttled: throttle.is_active,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RecordViews<'info> {
    /// The oracle crank posting the polled view count
    pub oracle: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle.key() @ PayoutError::UnauthorizedOracle,
    )]
    pub config: Account<'info, EngineConfig>,

    /// The throttle singleton; read-only here, it selects the effective RPM
    #[account(
        seeds = [ThrottleState::SEED_PREFIX],
        bump = throttle.bump,
    )]
    pub throttle: Account<'info, ThrottleState>,

    #[account(
        mut,
        seeds = [
            ClipSubmission::SEED_PREFIX,
            clip.creator.as_ref(),
            clip.submission_id.as_ref(),
        ],
        bump = clip.bump,
    )]
    pub clip: Account<'info, ClipSubmission>,

    #[account(
        mut,
        seeds = [CreatorVault::SEED_PREFIX, clip.creator.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, CreatorVault>,
}

#[event]
pub struct ViewsRecorded {
    pub creator: Pubkey,
    pub submission_id: [u8; 16],
    pub raw_view_count: u64,
    pub net_views: u64,
    pub earnings_cents: u64,
    pub rpm_cents: u16,
    pub throttled: bool,
    pub timestamp: i64,
}

#[event]
pub struct ClipActivated {
    pub creator: Pubkey,
    pub submission_id: [u8; 16],
    pub net_views: u64,
    pub timestamp: i64,
}
