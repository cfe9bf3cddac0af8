//! Runtime layer for Rainfall Explorer.
//!
//! Owns the application context (loaded datasets, controller state and the
//! output region) and turns menu selections into per-year report output.

pub mod controller;
pub mod menu;
pub mod output;
pub mod reports;

pub use rainfall_core as core;
pub use rainfall_data as data;
