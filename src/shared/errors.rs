//! Error handling for the adapter

use thiserror::Error;

/// Decimal conversion errors
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error("Converted amount does not fit into 128 bits")]
    Overflow,

    #[error("Decimal count out of supported range: {0}")]
    DecimalsOutOfRange(u8),
}

/// Errors raised by external collaborators
#[derive(Error, Debug, Clone)]
pub enum CollaboratorError {
    #[error("Ledger call failed: {0}")]
    Ledger(String),

    #[error("Pool call failed: {0}")]
    Pool(String),

    #[error("Quoter call failed: {0}")]
    Quoter(String),

    #[error("Router call failed: {0}")]
    Router(String),
}

/// Wrap/unwrap accounting errors
#[derive(Error, Debug)]
pub enum AccountingError {
    #[error("Unwrap fee divisor is zero")]
    ZeroFeeDivisor,

    #[error("Asset not registered: {0}")]
    UnknownAsset(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// Swap execution errors
#[derive(Error, Debug)]
pub enum SwapError {
    #[error("Invalid compute type for pair ({input}, {output})")]
    InvalidComputeType { input: String, output: String },

    #[error("Slippage limit exceeded: output {output} below minimum {minimum}")]
    SlippageLimitExceeded { output: u128, minimum: u128 },

    #[error("Asset not registered: {0}")]
    UnknownAsset(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

/// General adapter error
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Accounting error: {0}")]
    Accounting(#[from] AccountingError),

    #[error("Swap error: {0}")]
    Swap(#[from] SwapError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),
}
