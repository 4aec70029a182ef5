// charge/mod.rs
// Re-exports for the charge module

mod types;

pub use types::*;

#[cfg(test)]
#[path = "tests/charge_state.rs"]
mod charge_state;
