//! bufy-core
//!
//! Budget derivation, list view state and settings navigation for BUFΥ.
//! Depends on bufy-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod actions;
pub mod budget_service;
pub mod budget_view;
pub mod error;
pub mod notification;
pub mod settings_service;
pub mod snapshot_store;
pub mod summary_service;

pub use actions::*;
pub use budget_service::*;
pub use budget_view::*;
pub use error::CoreError;
pub use notification::*;
pub use settings_service::*;
pub use snapshot_store::*;
pub use summary_service::*;
