use anchor_lang::prelude::*;

/// Engine-wide payout configuration, set once by the admin
#[account]
#[derive(InitSpace)]
pub struct EngineConfig {
    /// Admin authority - may retune the engine and flip the throttle
    pub admin: Pubkey,
    /// Oracle authority - the off-chain crank that polls platform view
    /// counts and runs the aggregation and finalization jobs
    pub oracle_authority: Pubkey,
    /// RPM in cents per 1,000 views while the throttle is not engaged
    pub default_rpm_cents: u16,
    /// Suggested reduced RPM while the throttle is engaged
    pub protection_rpm_cents: u16,
    /// Minimum cents for any nonzero clip payout
    pub min_payout_cents: u32,
    /// Net views required before a clip starts earning
    pub activation_threshold_views: u32,
    /// PDA bump seed
    pub bump: u8,
}

/// System-wide risk throttle, a single row read on every earnings computation
#[account]
#[derive(InitSpace)]
pub struct ThrottleState {
    /// Whether the reduced RPM is currently in force
    pub is_active: bool,
    /// Effective RPM while active, in cents per 1,000 views; zero while inactive
    pub rpm_override_cents: u16,
    /// Rolling average click-through rate, basis points
    pub avg_ctr_bps: u16,
    /// Rolling average registration rate, basis points
    pub avg_reg_rate_bps: u16,
    /// Rolling average day-1 retention rate, basis points
    pub avg_day1_rate_bps: u16,
    /// Latest advisory risk score from the aggregation job
    pub risk_points: u8,
    /// Timestamp of the last inactive -> active transition
    pub activated_at: i64,
    /// Timestamp of the last rolling-average write
    pub updated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Per-creator earnings ledger across clips, bonuses and payouts
#[account]
#[derive(InitSpace)]
pub struct CreatorVault {
    /// The creator's wallet address - owner of this vault
    pub creator: Pubkey,
    /// Lifetime view earnings in cents
    pub total_earned_cents: u64,
    /// Lifetime monthly bonuses in cents
    pub total_bonus_cents: u64,
    /// Cents already finalized/paid out off-chain
    pub total_paid_cents: u64,
    /// Number of clips submitted
    pub clips_submitted: u32,
    /// Number of clips that passed verification
    pub clips_verified: u32,
    /// PDA bump seed
    pub bump: u8,
}

/// One content submission by a creator
#[account]
#[derive(InitSpace)]
pub struct ClipSubmission {
    /// The creator who submitted the clip
    pub creator: Pubkey,
    /// Client-generated submission identifier
    pub submission_id: [u8; 16],
    /// Platform the clip was posted to
    pub platform: Platform,
    /// Verification status; earnings only accrue once Verified
    pub status: ClipStatus,
    /// Last polled lifetime view count from the platform
    pub raw_view_count: u64,
    /// Lifetime view count captured at first verification, fixed once set
    pub baseline_view_count: u64,
    /// Derived earnings in cents, recomputed on every poll
    pub earnings_cents: u64,
    /// True once net views crossed the activation threshold
    pub is_activated: bool,
    /// Timestamp of submission
    pub submitted_at: i64,
    /// Timestamp of verification, zero while pending
    pub verified_at: i64,
    /// Timestamp of the last view-count poll
    pub last_polled_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Settled monthly bonus for one creator and one calendar month.
/// The PDA is derived from (creator, month_index), so a month can only
/// settle once.
#[account]
#[derive(InitSpace)]
pub struct BonusRecord {
    /// The creator the bonus was settled for
    pub creator: Pubkey,
    /// Months since the Unix epoch (year * 12 + month zero-based)
    pub month_index: u32,
    /// Trailing-month net-view aggregate supplied by the finalization job
    pub monthly_net_views: u64,
    /// Resolved tier
    pub tier: BonusTier,
    /// Lump-sum bonus in cents for the resolved tier
    pub bonus_cents: u64,
    /// Timestamp of settlement
    pub settled_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    TikTok,
    YouTube,
    Instagram,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClipStatus {
    Pending,
    Verified,
    Rejected,
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BonusTier {
    None,
    Verified,
    Proven,
    Super,
}

impl EngineConfig {
    pub const SEED_PREFIX: &'static [u8] = b"engine";
}

impl ThrottleState {
    pub const SEED_PREFIX: &'static [u8] = b"throttle";
}

impl CreatorVault {
    pub const SEED_PREFIX: &'static [u8] = b"vault";
}

impl ClipSubmission {
    pub const SEED_PREFIX: &'static [u8] = b"clip";
}

impl BonusRecord {
    pub const SEED_PREFIX: &'static [u8] = b"bonus";
}
