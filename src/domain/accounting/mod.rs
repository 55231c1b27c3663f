//! Wrap/unwrap accounting between ledger custody and adapter custody

mod wrap_unwrap;

pub use wrap_unwrap::{UnwrapFee, UnwrapOutcome, WrapUnwrapAccountant};
