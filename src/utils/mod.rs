//! Utility modules for the tile pair browser

pub mod format;

// Re-export commonly used helpers
pub use format::*;
