use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{ClipStatus, ClipSubmission, EngineConfig};

/// Rejects a pending clip
///
/// Terminal: a rejected clip never earns and cannot be re-verified. The
/// creator has to submit again under a new submission id.
pub fn reject_clip(ctx: Context<RejectClip>) -> Result<()> {
    let clip = &mut ctx.accounts.clip;
    require!(clip.status == ClipStatus::Pending, PayoutError::ClipNotPending);

    clip.status = ClipStatus::Rejected;

    emit!(ClipRejected {
        creator: clip.creator,
        submission_id: clip.submission_id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RejectClip<'info> {
    /// The oracle crank rejecting the clip
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
}

#[event]
pub struct ClipRejected {
    pub creator: Pubkey,
    pub submission_id: [u8; 16],
    pub timestamp: i64,
}
