//! TUI Life (workspace facade crate).
//!
//! Re-exports the member crates as `tui_life::{core,input,term,types}` and
//! hosts the runner's environment configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;
