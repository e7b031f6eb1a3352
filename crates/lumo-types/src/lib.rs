//! Shared types, adapter traits, and error types for the Lumo theme.
//!
//! This crate contains the foundational types that are shared between the
//! theme crates and all adapter implementations. Extracting these into a
//! separate crate allows adapter crates to compile in parallel with the
//! theme's feature modules.

pub mod config_adapter;
pub mod error;
pub mod file_adapter;
pub mod prelude;
pub mod render_cache;
pub mod texts;

// vim: ts=4
