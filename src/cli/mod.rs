pub mod commands;
mod completion;
pub mod core;
pub mod help;
pub mod output;
pub mod render;
mod shell;
pub mod shell_context;
pub mod table;

pub use shell::{run_cli, SCRIPT_ENV};
pub use shell_context::HOME_ENV;
