//! AMM interface traits

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::shared::errors::CollaboratorError;
use crate::shared::types::{NativeAmount, Quote};

/// One leg of the anchor pool as the pool itself reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAsset {
    pub address: Pubkey,
    pub decimals: u8,
}

/// Read-only pool accessors, used once at adapter construction to populate
/// the asset registry
#[async_trait]
pub trait AmmPool: Send + Sync {
    async fn base_asset(&self) -> Result<PoolAsset, CollaboratorError>;

    async fn quote_asset(&self) -> Result<PoolAsset, CollaboratorError>;
}

/// External best-execution price discovery.
///
/// The returned quote may diverge from the literal two-address route if a
/// superior path exists; the adapter passes it through unvalidated.
#[async_trait]
pub trait RouteQuoter: Send + Sync {
    async fn find_best_path(
        &self,
        route: &[Pubkey],
        amount_in: NativeAmount,
    ) -> Result<Quote, CollaboratorError>;
}

/// External AMM router executing a quoted path
#[async_trait]
pub trait AmmRouter: Send + Sync {
    async fn execute_swap(
        &self,
        amount_in: NativeAmount,
        min_amount_out: NativeAmount,
        quote: &Quote,
        recipient: Pubkey,
        deadline: i64,
    ) -> Result<NativeAmount, CollaboratorError>;

    async fn approve_transfers(&self, asset: Pubkey, amount: u128)
        -> Result<(), CollaboratorError>;
}
