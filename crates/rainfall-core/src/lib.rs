//! Core domain types for Rainfall Explorer.
//!
//! Holds the rainfall record model, the shared error type, the descriptive
//! statistics used by the reports, number formatting helpers and the
//! command-line settings.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod statistics;
