//! AMM collaborators - pool accessors, route quoting and swap execution

mod amm_interface;

pub use amm_interface::{AmmPool, AmmRouter, PoolAsset, RouteQuoter};
