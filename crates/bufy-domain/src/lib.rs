//! bufy-domain
//!
//! Pure domain models (AccountSnapshot, BudgetCategory, BudgetEntry, filters, settings).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod category;
pub mod common;
pub mod filter;
pub mod settings;
pub mod snapshot;

pub use budget::*;
pub use category::*;
pub use common::*;
pub use filter::*;
pub use settings::*;
pub use snapshot::*;
