#![doc(test(attr(deny(warnings))))]

//! Budget View projects an account snapshot into per-category budget entries,
//! derives spending metrics from them and drives the budget list and settings
//! screens from a command shell.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget view tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
