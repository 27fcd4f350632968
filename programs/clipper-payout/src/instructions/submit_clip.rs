use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{ClipStatus, ClipSubmission, CreatorVault, Platform};

/// Submits a clip for tracking
///
/// The clip starts Pending with no baseline; the oracle fixes the baseline
/// view count at first successful verification. Earnings stay at zero until
/// the clip is verified and its net views cross the activation threshold.
pub fn submit_clip(
    ctx: Context<SubmitClip>,
    submission_id: [u8; 16],
    platform: Platform,
) -> Result<()> {
    let clock = Clock::get()?;

    let clip = &mut ctx.accounts.clip;
    clip.creator = ctx.accounts.creator.key();
    clip.submission_id = submission_id;
    clip.platform = platform;
    clip.status = ClipStatus::Pending;
    clip.raw_view_count = 0;
    clip.baseline_view_count = 0;
    clip.earnings_cents = 0;
    clip.is_activated = false;
    clip.submitted_at = clock.unix_timestamp;
    clip.verified_at = 0;
    clip.last_polled_at = 0;
    clip.bump = ctx.bumps.clip;

    let vault = &mut ctx.accounts.vault;
    vault.clips_submitted = vault
        .clips_submitted
        .checked_add(1)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    emit!(ClipSubmitted {
        creator: clip.creator,
        submission_id,
        platform,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(submission_id: [u8; 16])]
pub struct SubmitClip<'info> {
    /// The creator submitting the clip
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [CreatorVault::SEED_PREFIX, creator.key().as_ref()],
        bump = vault.bump,
        constraint = vault.creator == creator.key() @ PayoutError::Unauthorized,
    )]
    pub vault: Account<'info, CreatorVault>,

    #[account(
        init,
        payer = creator,
        space = 8 + ClipSubmission::INIT_SPACE,
        seeds = [
            ClipSubmission::SEED_PREFIX,
            creator.key().as_ref(),
            submission_id.as_ref(),
        ],
        bump,
    )]
    pub clip: Account<'info, ClipSubmission>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ClipSubmitted {
    pub creator: Pubkey,
    pub submission_id: [u8; 16],
    pub platform: Platform,
    pub timestamp: i64,
}
