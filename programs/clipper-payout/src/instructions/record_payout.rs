use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::state::{CreatorVault, EngineConfig};

/// Records a finalized payout against a creator's vault
///
/// The payout-finalization crank marks cents as paid after the off-chain
/// transfer settles. The vault only ledgers the amounts; it never holds
/// funds. A payout cannot exceed the creator's unpaid balance.
pub fn record_payout(ctx: Context<RecordPayout>, amount_cents: u64) -> Result<()> {
    require!(amount_cents > 0, PayoutError::InvalidPayoutAmount);

    let vault = &ctx.accounts.vault;
    let accrued = vault
        .total_earned_cents
        .checked_add(vault.total_bonus_cents)
        .ok_or(PayoutError::ArithmeticOverflow)?;
    let unpaid = accrued
        .checked_sub(vault.total_paid_cents)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    require!(amount_cents <= unpaid, PayoutError::InsufficientBalance);

    let vault = &mut ctx.accounts.vault;
    vault.total_paid_cents = vault
        .total_paid_cents
        .checked_add(amount_cents)
        .ok_or(PayoutError::ArithmeticOverflow)?;

    emit!(PayoutRecorded {
        creator: vault.creator,
        amount_cents,
        total_paid_cents: vault.total_paid_cents,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RecordPayout<'info> {
    /// The payout-finalization crank
    pub oracle: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle.key() @ PayoutError::UnauthorizedOracle,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        mut,
        seeds = [CreatorVault::SEED_PREFIX, vault.creator.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, CreatorVault>,
}

#[event]
pub struct PayoutRecorded {
    pub creator: Pubkey,
    pub amount_cents: u64,
    pub total_paid_cents: u64,
    pub timestamp: i64,
}
