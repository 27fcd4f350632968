use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{ClipStatus, ClipSubmission, CreatorVault, EngineConfig};

/// Verifies a pending clip and fixes its view baseline
///
/// Called by the oracle authority once platform-reported tags and ownership
/// match the submission. The lifetime view count observed at this moment
/// becomes the permanent baseline; only views beyond it are attributable to
/// the campaign window.
pub fn verify_clip(ctx: Context<VerifyClip>, observed_view_count: u64) -> Result<()> {
    let clip = &mut ctx.accounts.clip;
    require!(clip.status == ClipStatus::Pending, PayoutError::ClipNotPending);

    let clock = Clock::get()?;
    clip.status = ClipStatus::Verified;
    clip.baseline_view_count = observed_view_count;
    clip.raw_view_count = observed_view_count;
    clip.verified_at = clock.unix_timestamp;
    clip.last_polled_at = clock.unix_timestamp;

    let vault = &mut ctx.accounts.vault;
    vault.clips_verified = vault
        .clips_verified
        .checked_add(1)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    emit!(ClipVerified {
        creator: clip.creator,
        submission_id: clip.submission_id,
        baseline_view_count: observed_view_count,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct VerifyClip<'info> {
    /// The oracle crank verifying the clip
    pub oracle: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle.key() @ PayoutError::UnauthorizedOracle,
    )]
    pub config: Account<'info, EngineConfig>,

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
pub struct ClipVerified {
    pub creator: Pubkey,
    pub submission_id: [u8; 16],
    pub baseline_view_count: u64,
    pub timestamp: i64,
}
