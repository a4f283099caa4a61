//! CLI library components for the AED location cleaner.

pub mod logging;
pub mod pipeline;
pub mod types;
