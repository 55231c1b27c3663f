//! Ammbridge - token accounting adapter between a multi-asset ledger and an AMM
//! Built with Domain-Driven Design principles

pub mod adapter;
pub mod config;
pub mod domain;
pub mod math;
pub mod shared;

// Re-export main types for convenience
pub use adapter::PoolAdapter;
pub use domain::accounting::WrapUnwrapAccountant;
pub use domain::classify::ComputeClassifier;
pub use domain::swap::SwapExecutor;
pub use shared::types::{AssetId, ComputeType};
