//! Adapter composition root - construction, standing approvals and the
//! ledger-facing entry point

use std::sync::Arc;

use solana_sdk::pubkey::Pubkey;
use tracing::info;

use crate::config::{AdapterConfig, ApprovalMode};
use crate::domain::accounting::{UnwrapOutcome, WrapUnwrapAccountant};
use crate::domain::amm::{AmmPool, AmmRouter, RouteQuoter};
use crate::domain::assets::AssetRegistry;
use crate::domain::classify::ComputeClassifier;
use crate::domain::ledger::Ledger;
use crate::domain::swap::SwapExecutor;
use crate::shared::errors::AdapterError;
use crate::shared::types::{AssetId, NormalizedAmount};
use crate::shared::utils::{format_address, parse_address};

/// Token-accounting adapter between a multi-asset ledger and one AMM pool.
///
/// Holds no state beyond the construction-time asset registry; every swap
/// invocation is an independent transaction.
pub struct PoolAdapter {
    registry: Arc<AssetRegistry>,
    accountant: WrapUnwrapAccountant,
    executor: SwapExecutor,
}

impl PoolAdapter {
    /// Reads the pool legs once, populates the registry, and in
    /// infinite-approval mode grants the ledger and the router a standing
    /// u128::MAX allowance on both legs that is never renewed.
    pub async fn new(
        config: AdapterConfig,
        pool: Arc<dyn AmmPool>,
        ledger: Arc<dyn Ledger>,
        quoter: Arc<dyn RouteQuoter>,
        router: Arc<dyn AmmRouter>,
    ) -> Result<Self, AdapterError> {
        let recipient =
            parse_address(&config.swap.recipient).map_err(|e| AdapterError::Config(e.to_string()))?;

        let base = pool.base_asset().await?;
        let quote = pool.quote_asset().await?;
        let registry = Arc::new(AssetRegistry::for_pool(&base, &quote));

        if config.approvals.mode == ApprovalMode::Infinite {
            for asset in [base.address, quote.address] {
                ledger.approve_transfers(asset, u128::MAX).await?;
                router.approve_transfers(asset, u128::MAX).await?;
            }
            info!("Standing unlimited approvals granted to ledger and router");
        }

        let classifier = ComputeClassifier::new(registry.x_leg(), registry.y_leg());
        let accountant =
            WrapUnwrapAccountant::new(ledger, registry.clone(), config.approvals.mode);
        let executor = SwapExecutor::new(
            registry.clone(),
            classifier,
            quoter,
            router,
            recipient,
            config.swap.deadline_grace_secs,
            config.approvals.mode,
        );

        info!(
            "Adapter initialized for pool {}: legs {} ({}) / {} ({})",
            config.pool.address,
            registry.x_leg(),
            format_address(&base.address),
            registry.y_leg(),
            format_address(&quote.address),
        );

        Ok(Self {
            registry,
            accountant,
            executor,
        })
    }

    /// Entry point the ledger invokes as the delegate-compute leg of a
    /// composite interaction sequence.
    pub async fn compute_output_amount(
        &self,
        input_asset: AssetId,
        output_asset: AssetId,
        input_amount: NormalizedAmount,
        minimum_output: NormalizedAmount,
        initiating_account: Pubkey,
    ) -> Result<NormalizedAmount, AdapterError> {
        let result = self
            .executor
            .swap(
                input_asset,
                output_asset,
                input_amount,
                minimum_output,
                initiating_account,
            )
            .await?;
        Ok(result.output_amount)
    }

    pub async fn wrap(
        &self,
        asset_id: AssetId,
        amount: NormalizedAmount,
    ) -> Result<(), AdapterError> {
        Ok(self.accountant.wrap(asset_id, amount).await?)
    }

    pub async fn unwrap(
        &self,
        asset_id: AssetId,
        amount: NormalizedAmount,
    ) -> Result<UnwrapOutcome, AdapterError> {
        Ok(self.accountant.unwrap(asset_id, amount).await?)
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }
}
