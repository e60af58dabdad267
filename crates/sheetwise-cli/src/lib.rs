//! CLI library components for sheetwise.

pub mod commands;
pub mod logging;
