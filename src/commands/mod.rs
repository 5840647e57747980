//! One-shot CLI command handlers.
//!
//! Each command is implemented in its own submodule. Commands operate on the
//! same settings store and cache as the pipeline but bypass the decision
//! flow.

pub mod help;
pub mod status;
pub mod update;
