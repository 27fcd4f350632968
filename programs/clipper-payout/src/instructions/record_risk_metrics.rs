use anchor_lang::prelude::*;

use crate::constants::MAX_RATE_BPS;
use crate::error::PayoutError;
use crate::math;
use crate::state::{EngineConfig, ThrottleState};

/// Records rolling conversion averages and the advisory risk score
///
/// The aggregation crank writes the rolling click-through, registration and
/// day-1 retention averages. The banded risk score is computed and stored
/// for display, but this instruction never engages the throttle itself;
/// that transition is an operational decision made through `set_throttle`.
pub fn record_risk_metrics(
    ctx: Context<RecordRiskMetrics>,
    avg_ctr_bps: u16,
    avg_reg_rate_bps: u16,
    avg_day1_rate_bps: u16,
) -> Result<()> {
    require!(avg_ctr_bps <= MAX_RATE_BPS, PayoutError::InvalidRateBps);
    require!(avg_reg_rate_bps <= MAX_RATE_BPS, PayoutError::InvalidRateBps);
    require!(avg_day1_rate_bps <= MAX_RATE_BPS, PayoutError::InvalidRateBps);

    let throttle = &mut ctx.accounts.throttle;
    let risk_points = math::throttle_risk_points(
        avg_ctr_bps,
        avg_reg_rate_bps,
        avg_day1_rate_bps,
        throttle.is_active,
    );

    let clock = Clock::get()?;
    throttle.avg_ctr_bps = avg_ctr_bps;
    throttle.avg_reg_rate_bps = avg_reg_rate_bps;
    throttle.avg_day1_rate_bps = avg_day1_rate_bps;
    throttle.risk_points = risk_points;
    throttle.updated_at = clock.unix_timestamp;

    emit!(RiskMetricsRecorded {
        avg_ctr_bps,
        avg_reg_rate_bps,
        avg_day1_rate_bps,
        risk_points,
        throttle_active: throttle.is_active,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RecordRiskMetrics<'info> {
    /// The aggregation crank posting rolling averages
    pub oracle: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle.key() @ PayoutError::UnauthorizedOracle,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        mut,
        seeds = [ThrottleState::SEED_PREFIX],
        bump = throttle.bump,
    )]
    pub throttle: Account<'info, ThrottleState>,
}

#[event]
pub struct RiskMetricsRecorded {
    pub avg_ctr_bps: u16,
    pub avg_reg_rate_bps: u16,
    pub avg_day1_rate_bps: u16,
    pub risk_points: u8,
    pub throttle_active: bool,
    pub timestamp: i64,
}
