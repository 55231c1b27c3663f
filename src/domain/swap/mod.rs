//! Swap orchestration - classify, convert, quote, execute, enforce

mod swap_executor;

pub use swap_executor::SwapExecutor;
