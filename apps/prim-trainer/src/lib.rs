//! # prim-trainer
//!
//! Terminal front-end for `prim-core`.
//!
//! - `config` - TOML graph files
//! - `repl` - the interactive play loop
//! - `report` - text and JSON output
//! - `error` - the binary's error type

pub mod config;
pub mod error;
pub mod repl;
pub mod report;

pub use config::GraphConfig;
pub use error::TrainerError;
pub use repl::{Command, Flow, Repl};
