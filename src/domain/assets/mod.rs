//! Asset registry - derived-identifier bookkeeping for the pool legs

mod asset_registry;

pub use asset_registry::AssetRegistry;
