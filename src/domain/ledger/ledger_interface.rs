//! Ledger interface trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::shared::errors::CollaboratorError;
use crate::shared::types::AssetId;

/// Typed operation carried by a ledger interaction.
///
/// The adapter issues `Wrap` and `Unwrap`; `DelegateCompute` is the variant
/// under which the ledger calls back into the adapter as one leg of a
/// composite interaction sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionKind {
    Wrap,
    Unwrap,
    DelegateCompute,
}

/// One ledger operation against an asset and amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub asset: AssetId,
    pub amount: u128,
}

impl Interaction {
    pub fn wrap(asset: AssetId, amount: u128) -> Self {
        Self {
            kind: InteractionKind::Wrap,
            asset,
            amount,
        }
    }

    pub fn unwrap(asset: AssetId, amount: u128) -> Self {
        Self {
            kind: InteractionKind::Unwrap,
            asset,
            amount,
        }
    }
}

/// Interface to the external multi-asset ledger
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn perform_interaction(&self, interaction: Interaction) -> Result<(), CollaboratorError>;

    /// Runtime-mutable fee parameter. Callers must refetch it per unwrap,
    /// never cache it.
    async fn unwrap_fee_divisor(&self) -> Result<u128, CollaboratorError>;

    async fn approve_transfers(&self, asset: Pubkey, amount: u128)
        -> Result<(), CollaboratorError>;
}
