//! Common types used across the adapter

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

/// Canonical fixed-point scale all cross-component amounts use
pub const NORMALIZED_DECIMALS: u8 = 18;

/// Amount expressed at the canonical 18-decimal scale
pub type NormalizedAmount = u128;

/// Amount expressed at an asset's own decimal scale
pub type NativeAmount = u128;

/// Derived 256-bit asset identifier.
///
/// Computed as `SHA-256(native_address || zero sub-identifier)`. Pure function
/// of the address, reproducible by any collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Sub-identifier is fixed at zero for fungible assets.
    pub fn derive(address: &Pubkey) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(address.to_bytes());
        hasher.update([0u8; 32]);
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({}..)", &hex::encode(self.0)[..8])
    }
}

/// Registry entry for one pool leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub address: Pubkey,
    pub decimals: u8,
}

/// High-level operation implied by an (input, output) asset pair.
///
/// Open sum type: new variants (deposit, withdraw) can be added without
/// changing the classification contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputeType {
    Swap,
    Unsupported,
}

/// One hop of a quoted execution path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteHop {
    pub asset: Pubkey,
    pub fee_tier: u32,
    pub protocol_version: u8,
    pub projected_out: NativeAmount,
}

/// Best-execution path produced by the external quoter.
///
/// Consumed read-only; hops are passed through to the router unvalidated and
/// may traverse more assets than the two-address route that was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub hops: Vec<QuoteHop>,
    pub amount_in: NativeAmount,
    pub amount_out: NativeAmount,
}

/// Outcome of a completed swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapResult {
    pub output_amount: NormalizedAmount,
    pub minimum_satisfied: bool,
}

/// Audit record emitted once per swap attempt that reached the floor check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRecord {
    pub input_asset: AssetId,
    pub output_asset: AssetId,
    pub input_amount: NormalizedAmount,
    pub output_amount: NormalizedAmount,
    pub minimum_output_amount: NormalizedAmount,
    pub initiating_account: Pubkey,
    pub success: bool,
}
