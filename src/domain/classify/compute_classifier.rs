//! Classification of (input, output) asset pairs

use crate::shared::types::{AssetId, ComputeType};

/// Decides which high-level operation an asset pair implies.
///
/// Total over the declared asset universe: every pair classifies, and only
/// the pool's two legs in either order classify as `Swap`.
#[derive(Debug, Clone, Copy)]
pub struct ComputeClassifier {
    x_leg: AssetId,
    y_leg: AssetId,
}

impl ComputeClassifier {
    pub fn new(x_leg: AssetId, y_leg: AssetId) -> Self {
        Self { x_leg, y_leg }
    }

    pub fn classify(&self, input: AssetId, output: AssetId) -> ComputeType {
        if (input == self.x_leg && output == self.y_leg)
            || (input == self.y_leg && output == self.x_leg)
        {
            ComputeType::Swap
        } else {
            ComputeType::Unsupported
        }
    }

    pub fn x_leg(&self) -> AssetId {
        self.x_leg
    }

    pub fn y_leg(&self) -> AssetId {
        self.y_leg
    }
}
