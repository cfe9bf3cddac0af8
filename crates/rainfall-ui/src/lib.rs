//! Terminal UI layer for Rainfall Explorer.
//!
//! Provides themes, the header and dropdown components, the output and
//! chart views, and the main application event loop built on top of
//! [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod output_view;
pub mod themes;

pub use rainfall_core as core;
