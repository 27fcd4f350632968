use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{EngineConfig, ThrottleState};

/// Initializes the engine configuration and the throttle singleton
///
/// The signing admin becomes the engine admin. The oracle authority is the
/// off-chain crank that polls platform view counts, writes rolling risk
/// metrics and settles bonuses. The throttle starts inactive.
pub fn initialize_engine(
    ctx: Context<InitializeEngine>,
    oracle_authority: Pubkey,
    default_rpm_cents: u16,
    protection_rpm_cents: u16,
    min_payout_cents: u32,
    activation_threshold_views: u32,
) -> Result<()> {
    require!(default_rpm_cents > 0, PayoutError::InvalidRpm);
    require!(protection_rpm_cents > 0, PayoutError::InvalidRpm);
    require!(
        protection_rpm_cents <= default_rpm_cents,
        PayoutError::InvalidProtectionRpm
    );
    require!(
        activation_threshold_views > 0,
        PayoutError::InvalidActivationThreshold
    );

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.oracle_authority = oracle_authority;
    config.default_rpm_cents = default_rpm_cents;
    config.protection_rpm_cents = protection_rpm_cents;
    config.min_payout_cents = min_payout_cents;
    config.activation_threshold_views = activation_threshold_views;
    config.bump = ctx.bumps.config;

    let throttle = &mut ctx.accounts.throttle;
    throttle.is_active = false;
    throttle.rpm_override_cents = 0;
    throttle.avg_ctr_bps = 0;
    throttle.avg_reg_rate_bps = 0;
    throttle.avg_day1_rate_bps = 0;
    throttle.risk_points = 0;
    throttle.activated_at = 0;
    throttle.updated_at = 0;
    throttle.bump = ctx.bumps.throttle;

    emit!(EngineInitialized {
        admin: config.admin,
        oracle_authority,
        default_rpm_cents,
        protection_rpm_cents,
        min_payout_cents,
        activation_threshold_views,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeEngine<'info> {
    /// The admin paying for and owning the engine configuration
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + EngineConfig::INIT_SPACE,
        seeds = [EngineConfig::SEED_PREFIX],
        bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + ThrottleState::INIT_SPACE,
        seeds = [ThrottleState::SEED_PREFIX],
        bump,
    )]
    pub throttle: Account<'info, ThrottleState>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EngineInitialized {
    pub admin: Pubkey,
    pub oracle_authority: Pubkey,
    pub default_rpm_cents: u16,
    pub protection_rpm_cents: u16,
    pub min_payout_cents: u32,
    pub activation_threshold_views: u32,
    pub timestamp: i64,
}
