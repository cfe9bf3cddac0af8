//! Reusable widgets for the Rainfall Explorer TUI.

pub mod dropdown;
pub mod header;
