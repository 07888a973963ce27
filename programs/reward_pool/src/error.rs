use anchor_lang::prelude::*;

#[error_code]
pub enum RewardPoolError {
    // Campaign registry errors
    #[msg("The campaign already exists.")]
    CampaignAlreadyExists,
    #[msg("Not enough reward in the pool.")]
    NotEnoughReward,

    // Claim tracking errors
    #[msg("Claim amount exceeds allowed balance")]
    ClaimAmountExceedsAllowedBalance,

    // Access control errors
    #[msg("Only campaign creator allowed to withdraw")]
    OnlyCampaignCreatorAllowed,
    #[msg("Invalid owner address")]
    InvalidAddress,
    #[msg("Program is paused")]
    ProgramPaused,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Unauthorized campaign id")]
    UnauthorizedCampaignId,

    // System level errors
    #[msg("Arithmetic operation failed")]
    ArithmeticError,
    #[msg("Reward pool already initialized")]
    PoolAlreadyInitialized,

    // Amount and custody errors
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Insufficient token balance for transfer")]
    InsufficientFunds,
    #[msg("Token mint does not match the pool's token mint")]
    TokenMintMismatch,
    #[msg("Invalid allocation root")]
    InvalidAllocationRoot,
}
