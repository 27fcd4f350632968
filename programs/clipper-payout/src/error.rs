use anchor_lang::prelude::*;

#[error_code]
pub enum PayoutError {
    #[msg("RPM must be greater than zero")]
    InvalidRpm,

    #[msg("Protection RPM must not exceed the default RPM")]
    InvalidProtectionRpm,

    #[msg("Activation threshold must be greater than zero")]
    InvalidActivationThreshold,

    #[msg("Unauthorized - signer is not the oracle authority")]
    UnauthorizedOracle,

    #[msg("Unauthorized - signer is not the engine admin")]
    UnauthorizedAdmin,

    #[msg("Unauthorized - you are not the owner of this vault")]
    Unauthorized,

    #[msg("Clip is not pending verification")]
    ClipNotPending,

    #[msg("Clip has not been verified")]
    ClipNotVerified,

    #[msg("Rate exceeds 10,000 basis points")]
    InvalidRateBps,

    #[msg("Throttle is already active")]
    ThrottleAlreadyActive,

    #[msg("Throttle is not active")]
    ThrottleNotActive,

    #[msg("Throttle RPM override must be positive and not exceed the default RPM")]
    InvalidRpmOverride,

    #[msg("Payout amount must be greater than zero")]
    InvalidPayoutAmount,

    #[msg("Payout amount exceeds unpaid balance")]
    InsufficientBalance,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
