//! Structured logging with visual formatting.
//!
//! Provides the macro family used across themr for its box-drawing output
//! style. A run is bracketed by `log_version!` and `log_end!`; conceptual
//! blocks start with `log_block_start!` and continue with `log_decorated!`
//! or `log_indented!`. Semantic levels (`log_warning!`, `log_error!`, ...)
//! carry a `[LEVEL]` prefix inside the pipe structure.
//!
//! Logging can be disabled at runtime for quiet operation in tests.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable logging for the current process.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }
}

/// Write a formatted line to stdout, flushing immediately.
pub fn write_output(text: &str) {
    print!("{text}");
    let _ = std::io::stdout().flush();
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let version = env!("CARGO_PKG_VERSION");
            $crate::logger::write_output(&format!("┏ themr v{version} ━━╸\n"));
        }
    }};
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("╹\n");
        }
    }};
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃\n┣ {message}\n"));
        }
    }};
}

/// Log a decorated message as part of an existing block.
#[macro_export]
macro_rules! log_decorated {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣ {message}\n"));
        }
    }};
}

/// Log an indented message for sub-items within a block.
#[macro_export]
macro_rules! log_indented {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃   {message}\n"));
        }
    }};
}

/// Log a single empty pipe line for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            $crate::logger::write_output("┃\n");
        }
    }};
}

/// Log a warning message with pipe prefix and yellow-colored level tag.
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[33mWARNING\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an informational message with pipe prefix and green-colored level tag.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[32mINFO\x1b[0m] {message}\n"));
        }
    }};
}

/// Log an error message with pipe prefix and red-colored level tag.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┣[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}

/// Log a terminating error with a pipe before it and a corner marker,
/// indicating flow termination.
#[macro_export]
macro_rules! log_error_exit {
    ($($arg:tt)+) => {{
        use $crate::logger::Log;
        if Log::is_enabled() {
            let message = format!($($arg)+);
            $crate::logger::write_output(&format!("┃\n┗[\x1b[31mERROR\x1b[0m] {message}\n"));
        }
    }};
}
