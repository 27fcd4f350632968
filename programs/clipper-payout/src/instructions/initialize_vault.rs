use anchor_lang::prelude::*;

use crate::state::CreatorVault;

/// Initializes a creator's earnings vault
///
/// Each creator has exactly one vault, derived from their wallet address.
/// The vault ledgers view earnings, monthly bonuses and finalized payouts;
/// money itself moves off-chain.
pub fn initialize_vault(ctx: Context<InitializeVault>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    vault.creator = ctx.accounts.creator.key();
    vault.total_earned_cents = 0;
    vault.total_bonus_cents = 0;
    vault.total_paid_cents = 0;
    vault.clips_submitted = 0;
    vault.clips_verified = 0;
    vault.bump = ctx.bumps.vault;

    emit!(VaultCreated {
        creator: vault.creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    /// The creator initializing their vault
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = 8 + CreatorVault::INIT_SPACE,
        seeds = [CreatorVault::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub vault: Account<'info, CreatorVault>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct VaultCreated {
    pub creator: Pubkey,
    pub timestamp: i64,
}
