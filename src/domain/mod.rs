//! Domain layer - core business logic and entities

pub mod accounting;
pub mod amm;
pub mod assets;
pub mod classify;
pub mod ledger;
pub mod swap;
