//! Data layer for Rainfall Explorer.
//!
//! Loads the yearly rainfall CSV files, derives the monthly aggregates and
//! histogram bins behind the charts, and filters heavy-rainfall days.

pub mod aggregator;
pub mod reader;
pub mod threshold;

pub use rainfall_core as core;
