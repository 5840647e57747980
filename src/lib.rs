//! # Themr Library
//!
//! Internal library for the themr binary.
//!
//! themr decides, once per invocation, whether the desktop should be in
//! light or dark mode based on the user's local sunrise and sunset times.
//! It is meant to be fired periodically by an external scheduler as a
//! short-lived process.
//!
//! ## Architecture
//!
//! - **Entry Point**: `Themr` struct runs the load → cache → decide → apply
//!   pipeline
//! - **Settings**: `settings` module owns the versioned TOML document,
//!   its bundled defaults, and forward migration
//! - **Cache**: `suncache` persists the sunrise/sunset pair atomically
//! - **Engine**: `engine` is the pure Light/Dark classification
//! - **Gateway**: `gateway` holds the seams to theme-application and
//!   notification collaborators
//! - **Provider**: `provider` computes sun times via the `sunrise` crate
//! - **Infrastructure**: argument parsing, one-shot commands, logging

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod commands;
pub mod common;
pub mod engine;
pub mod gateway;
pub mod provider;
pub mod settings;
pub mod suncache;

mod themr;

// Re-export for binary
pub use engine::{ThemeVerdict, decide};
pub use themr::Themr;
