//! Ledger collaborator - the multi-asset balance and interaction engine

mod ledger_interface;

pub use ledger_interface::{Interaction, InteractionKind, Ledger};
