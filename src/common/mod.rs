// Shared constants and small utilities
pub mod constants;
pub mod utils;
