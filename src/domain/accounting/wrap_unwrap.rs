//! Fee-aware wrap/unwrap accounting

use std::sync::Arc;

use tracing::info;

use crate::config::ApprovalMode;
use crate::domain::assets::AssetRegistry;
use crate::domain::ledger::{Interaction, Ledger};
use crate::math::convert_decimals;
use crate::shared::errors::AccountingError;
use crate::shared::types::{AssetId, AssetInfo, NormalizedAmount, NORMALIZED_DECIMALS};
use crate::shared::utils::format_normalized;

/// Fee deducted by an unwrap, split into its two sources
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapFee {
    /// `amount / fee_divisor`, the ledger-controlled proportional fee
    pub divisor_fee: u128,
    /// Remainder truncated when rescaling to native decimals, folded into
    /// the fee rather than lost
    pub truncation: u128,
}

impl UnwrapFee {
    pub fn total(&self) -> u128 {
        self.divisor_fee + self.truncation
    }
}

/// Result of an unwrap. `unwrapped_amount + fee.total()` equals the
/// requested amount exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnwrapOutcome {
    pub unwrapped_amount: NormalizedAmount,
    pub fee: UnwrapFee,
}

/// Converts ledger-unit amounts to and from adapter-held balances
pub struct WrapUnwrapAccountant {
    ledger: Arc<dyn Ledger>,
    registry: Arc<AssetRegistry>,
    approval_mode: ApprovalMode,
}

impl WrapUnwrapAccountant {
    pub fn new(
        ledger: Arc<dyn Ledger>,
        registry: Arc<AssetRegistry>,
        approval_mode: ApprovalMode,
    ) -> Self {
        Self {
            ledger,
            registry,
            approval_mode,
        }
    }

    /// Move `amount` of ledger-unit balance into adapter custody. The amount
    /// is already in the unit the ledger uses; no conversion happens here.
    pub async fn wrap(
        &self,
        asset_id: AssetId,
        amount: NormalizedAmount,
    ) -> Result<(), AccountingError> {
        let info = self.lookup(asset_id)?;
        if self.approval_mode == ApprovalMode::PerCall {
            self.ledger.approve_transfers(info.address, amount).await?;
        }
        info!(
            "Wrapping {} of asset {:?} into custody",
            format_normalized(amount),
            asset_id
        );
        self.ledger
            .perform_interaction(Interaction::wrap(asset_id, amount))
            .await?;
        Ok(())
    }

    /// Release `amount` back to native custody, net of the unwrap fee.
    ///
    /// The divisor fee is `amount / fee_divisor`; whatever rescaling the net
    /// amount to native decimals truncates is added to the fee on top of it.
    pub async fn unwrap(
        &self,
        asset_id: AssetId,
        amount: NormalizedAmount,
    ) -> Result<UnwrapOutcome, AccountingError> {
        let info = self.lookup(asset_id)?;

        // ledger-mutable parameter, re-read on every call
        let divisor = self.ledger.unwrap_fee_divisor().await?;
        if divisor == 0 {
            return Err(AccountingError::ZeroFeeDivisor);
        }

        let divisor_fee = amount / divisor;
        let net = amount - divisor_fee;
        let converted = convert_decimals(net, NORMALIZED_DECIMALS, info.decimals)?;
        let fee = UnwrapFee {
            divisor_fee,
            truncation: converted.truncated,
        };
        let unwrapped_amount = amount - fee.total();

        self.ledger
            .perform_interaction(Interaction::unwrap(asset_id, amount))
            .await?;
        info!(
            "Unwrapped {} of {} of asset {:?} (fee {} = {} divisor + {} truncation)",
            format_normalized(unwrapped_amount),
            format_normalized(amount),
            asset_id,
            fee.total(),
            fee.divisor_fee,
            fee.truncation
        );

        Ok(UnwrapOutcome {
            unwrapped_amount,
            fee,
        })
    }

    fn lookup(&self, asset_id: AssetId) -> Result<&AssetInfo, AccountingError> {
        self.registry
            .get(&asset_id)
            .ok_or_else(|| AccountingError::UnknownAsset(asset_id.to_string()))
    }
}
