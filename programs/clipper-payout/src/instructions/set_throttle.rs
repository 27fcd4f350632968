use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{EngineConfig, ThrottleState};

/// Engages or releases the system-wide RPM throttle
///
/// Admin-only. Engaging requires a positive RPM override no higher than the
/// default RPM; the override takes effect on the next view poll of every
/// clip. Releasing restores the default RPM and clears the override. The
/// advisory risk score informs this call but never triggers it.
pub fn set_throttle(
    ctx: Context<SetThrottle>,
    activate: bool,
    rpm_override_cents: u16,
) -> Result<()> {
    let config = &ctx.accounts.config;
    let throttle = &mut ctx.accounts.throttle;
    let clock = Clock::get()?;

    if activate {
        require!(!throttle.is_active, PayoutError::ThrottleAlreadyActive);
        require!(
            rpm_override_cents > 0 && rpm_override_cents <= config.default_rpm_cents,
            PayoutError::InvalidRpmOverride
        );

        throttle.is_active = true;
        throttle.rpm_override_cents = rpm_override_cents;
        throttle.activated_at = clock.unix_timestamp;

        emit!(ThrottleEngaged {
            rpm_override_cents,
            risk_points: throttle.risk_points,
            timestamp: clock.unix_timestamp,
        });
    } else {
        require!(throttle.is_active, PayoutError::ThrottleNotActive);

        throttle.is_active = false;
        throttle.rpm_override_cents = 0;

        emit!(ThrottleReleased {
            default_rpm_cents: config.default_rpm_cents,
            timestamp: clock.unix_timestamp,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct SetThrottle<'info> {
    /// The engine admin
    pub admin: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ PayoutError::UnauthorizedAdmin,
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
pub struct ThrottleEngaged {
    pub rpm_override_cents: u16,
    pub risk_points: u8,
    pub timestamp: i64,
}

#[event]
pub struct ThrottleReleased {
    pub default_rpm_cents: u16,
    pub timestamp: i64,
}
