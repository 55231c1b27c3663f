//! Best-route swap execution with slippage enforcement

use std::sync::Arc;

use chrono::Utc;
use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn};

use crate::config::ApprovalMode;
use crate::domain::amm::{AmmRouter, RouteQuoter};
use crate::domain::assets::AssetRegistry;
use crate::domain::classify::ComputeClassifier;
use crate::math::convert_decimals;
use crate::shared::errors::SwapError;
use crate::shared::types::{
    AssetId, AssetInfo, ComputeType, NormalizedAmount, SwapRecord, SwapResult,
    NORMALIZED_DECIMALS,
};

/// Orchestrates one complete swap against the AMM.
///
/// Stateless: every invocation is an independent transaction. Collaborator
/// failures propagate unmodified; the host transaction model owns rollback.
pub struct SwapExecutor {
    registry: Arc<AssetRegistry>,
    classifier: ComputeClassifier,
    quoter: Arc<dyn RouteQuoter>,
    router: Arc<dyn AmmRouter>,
    recipient: Pubkey,
    deadline_grace_secs: i64,
    approval_mode: ApprovalMode,
}

impl SwapExecutor {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: Arc<AssetRegistry>,
        classifier: ComputeClassifier,
        quoter: Arc<dyn RouteQuoter>,
        router: Arc<dyn AmmRouter>,
        recipient: Pubkey,
        deadline_grace_secs: i64,
        approval_mode: ApprovalMode,
    ) -> Self {
        Self {
            registry,
            classifier,
            quoter,
            router,
            recipient,
            deadline_grace_secs,
            approval_mode,
        }
    }

    pub async fn swap(
        &self,
        input_asset: AssetId,
        output_asset: AssetId,
        input_amount: NormalizedAmount,
        minimum_output: NormalizedAmount,
        initiating_account: Pubkey,
    ) -> Result<SwapResult, SwapError> {
        match self.classifier.classify(input_asset, output_asset) {
            ComputeType::Swap => {}
            ComputeType::Unsupported => {
                return Err(SwapError::InvalidComputeType {
                    input: input_asset.to_string(),
                    output: output_asset.to_string(),
                })
            }
        }

        let input_info = self.lookup(input_asset)?;
        let output_info = self.lookup(output_asset)?;

        // Dust below the input's native unit stays pool-side here; unwrap
        // accounting folds its dust into the fee instead.
        let native_in = convert_decimals(input_amount, NORMALIZED_DECIMALS, input_info.decimals)?
            .amount;

        // Classification pinned the pair to the two legs, so input/output
        // order is the hop order.
        let route = [input_info.address, output_info.address];
        let quote = self.quoter.find_best_path(&route, native_in).await?;
        info!(
            "Best route: {} hops, {} in -> {} projected out",
            quote.hops.len(),
            quote.amount_in,
            quote.amount_out
        );

        if self.approval_mode == ApprovalMode::PerCall {
            self.router
                .approve_transfers(input_info.address, native_in)
                .await?;
        }

        // Router floor stays zero: the caller's floor is enforced below,
        // after converting back to the normalized scale.
        let deadline = Utc::now().timestamp() + self.deadline_grace_secs;
        let native_out = self
            .router
            .execute_swap(native_in, 0, &quote, self.recipient, deadline)
            .await?;

        let output_amount =
            convert_decimals(native_out, output_info.decimals, NORMALIZED_DECIMALS)?.amount;

        let record = SwapRecord {
            input_asset,
            output_asset,
            input_amount,
            output_amount,
            minimum_output_amount: minimum_output,
            initiating_account,
            success: output_amount >= minimum_output,
        };
        self.emit_record(&record);

        if !record.success {
            return Err(SwapError::SlippageLimitExceeded {
                output: output_amount,
                minimum: minimum_output,
            });
        }
        Ok(SwapResult {
            output_amount,
            minimum_satisfied: true,
        })
    }

    fn emit_record(&self, record: &SwapRecord) {
        match serde_json::to_string(record) {
            Ok(payload) => info!(target: "ammbridge::audit", "swap record: {}", payload),
            Err(e) => warn!("Failed to serialize swap record: {}", e),
        }
    }

    fn lookup(&self, asset_id: AssetId) -> Result<&AssetInfo, SwapError> {
        self.registry
            .get(&asset_id)
            .ok_or_else(|| SwapError::UnknownAsset(asset_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amm::PoolAsset;
    use crate::shared::errors::CollaboratorError;
    use crate::shared::types::{Quote, QuoteHop};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct StubQuoter {
        calls: AtomicUsize,
    }

    impl StubQuoter {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RouteQuoter for StubQuoter {
        async fn find_best_path(
            &self,
            route: &[Pubkey],
            amount_in: u128,
        ) -> Result<Quote, CollaboratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // direct 1:1 route over the requested hops
            Ok(Quote {
                hops: route
                    .iter()
                    .map(|asset| QuoteHop {
                        asset: *asset,
                        fee_tier: 30,
                        protocol_version: 3,
                        projected_out: amount_in,
                    })
                    .collect(),
                amount_in,
                amount_out: amount_in,
            })
        }
    }

    struct StubRouter {
        fee_bps: u128,
        calls: AtomicUsize,
        seen: Mutex<Vec<(u128, u128, i64)>>,
        approvals: Mutex<Vec<(Pubkey, u128)>>,
    }

    impl StubRouter {
        fn with_fee_bps(fee_bps: u128) -> Self {
            Self {
                fee_bps,
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
                approvals: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AmmRouter for StubRouter {
        async fn execute_swap(
            &self,
            amount_in: u128,
            min_amount_out: u128,
            _quote: &Quote,
            _recipient: Pubkey,
            deadline: i64,
        ) -> Result<u128, CollaboratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((amount_in, min_amount_out, deadline));
            Ok(amount_in * (10_000 - self.fee_bps) / 10_000)
        }

        async fn approve_transfers(
            &self,
            asset: Pubkey,
            amount: u128,
        ) -> Result<(), CollaboratorError> {
            self.approvals.lock().unwrap().push((asset, amount));
            Ok(())
        }
    }

    struct Harness {
        executor: SwapExecutor,
        quoter: Arc<StubQuoter>,
        router: Arc<StubRouter>,
        x: AssetId,
        y: AssetId,
    }

    fn harness(decimals: u8, router_fee_bps: u128, mode: ApprovalMode) -> Harness {
        let base = PoolAsset {
            address: Pubkey::new_unique(),
            decimals,
        };
        let quote = PoolAsset {
            address: Pubkey::new_unique(),
            decimals,
        };
        let registry = Arc::new(AssetRegistry::for_pool(&base, &quote));
        let classifier = ComputeClassifier::new(registry.x_leg(), registry.y_leg());
        let quoter = Arc::new(StubQuoter::new());
        let router = Arc::new(StubRouter::with_fee_bps(router_fee_bps));
        let executor = SwapExecutor::new(
            registry.clone(),
            classifier,
            quoter.clone(),
            router.clone(),
            Pubkey::new_unique(),
            30,
            mode,
        );
        Harness {
            executor,
            quoter,
            router,
            x: registry.x_leg(),
            y: registry.y_leg(),
        }
    }

    const UNIT: u128 = 1_000_000_000_000_000_000;

    #[tokio::test]
    async fn test_swap_within_slippage_floor() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        // 6-decimal legs, 100 units in, 1:1 quote, 30 bps router fee
        let h = harness(6, 30, ApprovalMode::Infinite);
        let result = h
            .executor
            .swap(h.x, h.y, 100 * UNIT, 90 * UNIT, Pubkey::new_unique())
            .await
            .unwrap();

        // 100 units minus the router fee, back at normalized scale
        assert_eq!(result.output_amount, 99_700_000u128 * 10u128.pow(12));
        assert!(result.minimum_satisfied);
        assert_eq!(h.quoter.calls.load(Ordering::SeqCst), 1);
        assert_eq!(h.router.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_swap_below_floor_is_rejected() {
        let h = harness(6, 30, ApprovalMode::Infinite);
        let result = h
            .executor
            .swap(h.x, h.y, 100 * UNIT, 150 * UNIT, Pubkey::new_unique())
            .await;

        assert!(matches!(
            result,
            Err(SwapError::SlippageLimitExceeded { .. })
        ));
        // the router did execute; the host transaction model rolls it back
        assert_eq!(h.router.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_same_asset_pair_fails_before_any_collaborator_call() {
        let h = harness(6, 30, ApprovalMode::Infinite);
        let result = h
            .executor
            .swap(h.x, h.x, 100 * UNIT, 0, Pubkey::new_unique())
            .await;

        assert!(matches!(result, Err(SwapError::InvalidComputeType { .. })));
        assert_eq!(h.quoter.calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.router.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_foreign_asset_fails_classification() {
        let h = harness(6, 30, ApprovalMode::Infinite);
        let foreign = AssetId::derive(&Pubkey::new_unique());
        let result = h
            .executor
            .swap(h.x, foreign, 100 * UNIT, 0, Pubkey::new_unique())
            .await;
        assert!(matches!(result, Err(SwapError::InvalidComputeType { .. })));
    }

    #[tokio::test]
    async fn test_reverse_orientation_swaps() {
        let h = harness(6, 0, ApprovalMode::Infinite);
        let result = h
            .executor
            .swap(h.y, h.x, 5 * UNIT, 5 * UNIT, Pubkey::new_unique())
            .await
            .unwrap();
        assert_eq!(result.output_amount, 5 * UNIT);
    }

    #[tokio::test]
    async fn test_input_dust_is_discarded_at_native_conversion() {
        // sub-native-unit dust on the swap input is dropped, unlike unwrap
        // where truncation is folded into the fee
        let h = harness(6, 0, ApprovalMode::Infinite);
        let dust = 123_456u128;
        let result = h
            .executor
            .swap(h.x, h.y, 100 * UNIT + dust, 0, Pubkey::new_unique())
            .await
            .unwrap();

        let seen = h.router.seen.lock().unwrap();
        assert_eq!(seen[0].0, 100_000_000); // floored native input
        assert_eq!(result.output_amount, 100 * UNIT); // dust is gone
    }

    #[tokio::test]
    async fn test_router_floor_is_zero_and_deadline_set() {
        let h = harness(6, 30, ApprovalMode::Infinite);
        let before = Utc::now().timestamp();
        h.executor
            .swap(h.x, h.y, 100 * UNIT, 0, Pubkey::new_unique())
            .await
            .unwrap();

        let seen = h.router.seen.lock().unwrap();
        let (_, min_out, deadline) = seen[0];
        assert_eq!(min_out, 0);
        assert!(deadline >= before + 30);
    }

    #[tokio::test]
    async fn test_per_call_mode_approves_native_input() {
        let h = harness(6, 30, ApprovalMode::PerCall);
        h.executor
            .swap(h.x, h.y, 100 * UNIT, 0, Pubkey::new_unique())
            .await
            .unwrap();

        let approvals = h.router.approvals.lock().unwrap();
        assert_eq!(approvals.len(), 1);
        assert_eq!(approvals[0].1, 100_000_000);
    }

    #[tokio::test]
    async fn test_infinite_mode_skips_per_swap_approval() {
        let h = harness(6, 30, ApprovalMode::Infinite);
        h.executor
            .swap(h.x, h.y, 100 * UNIT, 0, Pubkey::new_unique())
            .await
            .unwrap();
        assert!(h.router.approvals.lock().unwrap().is_empty());
    }
}
