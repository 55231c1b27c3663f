//! Registry mapping derived asset identifiers to native metadata

use std::collections::HashMap;

use crate::domain::amm::PoolAsset;
use crate::shared::types::{AssetId, AssetInfo};

/// Holds exactly the two pool legs. Populated once at adapter construction
/// and never mutated afterward.
#[derive(Debug, Clone)]
pub struct AssetRegistry {
    entries: HashMap<AssetId, AssetInfo>,
    x_leg: AssetId,
    y_leg: AssetId,
}

impl AssetRegistry {
    pub fn for_pool(base: &PoolAsset, quote: &PoolAsset) -> Self {
        let x_leg = AssetId::derive(&base.address);
        let y_leg = AssetId::derive(&quote.address);
        let mut entries = HashMap::new();
        entries.insert(
            x_leg,
            AssetInfo {
                address: base.address,
                decimals: base.decimals,
            },
        );
        entries.insert(
            y_leg,
            AssetInfo {
                address: quote.address,
                decimals: quote.decimals,
            },
        );
        Self {
            entries,
            x_leg,
            y_leg,
        }
    }

    pub fn get(&self, id: &AssetId) -> Option<&AssetInfo> {
        self.entries.get(id)
    }

    pub fn x_leg(&self) -> AssetId {
        self.x_leg
    }

    pub fn y_leg(&self) -> AssetId {
        self.y_leg
    }
}
