use anchor_lang::prelude::*;

use crate::error::PayoutError;
use crate::math;
use crate::state::{BonusRecord, BonusTier, CreatorVault, EngineConfig};

/// Settles a creator's monthly bonus
///
/// The payout-finalization crank supplies the trailing-month net-view
/// aggregate; the tier table resolves it to a lump-sum bonus. The record PDA
/// is keyed by (creator, month_index), so a month can only settle once. A
/// record is written even for the None tier, which keeps the month closed.
pub fn settle_monthly_bonus(
    ctx: Context<SettleMonthlyBonus>,
    month_index: u32,
    monthly_net_views: u64,
) -> Result<()> {
    let (tier, bonus_cents) = math::monthly_bonus(monthly_net_views);
    let clock = Clock::get()?;

    let record = &mut ctx.accounts.bonus_record;
    record.creator = ctx.accounts.creator.key();
    record.month_index = month_index;
    record.monthly_net_views = monthly_net_views;
    record.tier = tier;
    record.bonus_cents = bonus_cents;
    record.settled_at = clock.unix_timestamp;
    record.bump = ctx.bumps.bonus_record;

    if bonus_cents > 0 {
        let vault = &mut ctx.accounts.vault;
        vault.total_bonus_cents = vault
            .total_bonus_cents
            .checked_add(bonus_cents)
            .ok_or(PayoutError::ArithmeticOverflow)?;
    }

    emit!(MonthlyBonusSettled {
        creator: record.creator,
        month_index,
        monthly_net_views,
        tier,
        bonus_cents,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(month_index: u32)]
pub struct SettleMonthlyBonus<'info> {
    /// The oracle crank settling the month
    #[account(mut)]
    pub oracle: Signer<'info>,

    #[account(
        seeds = [EngineConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle_authority == oracle.key() @ PayoutError::UnauthorizedOracle,
    )]
    pub config: Account<'info, EngineConfig>,

    /// The creator the bonus is settled for
    pub creator: SystemAccount<'info>,

    #[account(
        mut,
        seeds = [CreatorVault::SEED_PREFIX, creator.key().as_ref()],
        bump = vault.bump,
        constraint = vault.creator == creator.key() @ PayoutError::Unauthorized,
    )]
    pub vault: Account<'info, CreatorVault>,

    #[account(
        init,
        payer = oracle,
        space = 8 + BonusRecord::INIT_SPACE,
        seeds = [
            BonusRecord::SEED_PREFIX,
            creator.key().as_ref(),
            &month_index.to_le_bytes(),
        ],
        bump,
    )]
    pub bonus_record: Account<'info, BonusRecord>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MonthlyBonusSettled {
    pub creator: Pubkey,
    pub month_index: u32,
    pub monthly_net_views: u64,
    pub tier: BonusTier,
    pub bonus_cents: u64,
    pub timestamp: i64,
}
