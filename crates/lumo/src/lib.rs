//! Lumo is an admin-configurable front-end theme for web learning platforms.
//!
//! This crate assembles the theme's administrative settings surface:
//!
//! - a tabbed settings tree (General, Advanced, Frontpage, Footer, Forum)
//!   built fresh on every admin page load
//! - slider, sponsor, and client blocks whose size is itself a stored
//!   setting, expanded at build time
//! - a settings service that persists edits through the host's adapters and
//!   fires render-cache invalidation for visually-affecting settings
//!
//! The host platform supplies the storage adapters and renders the returned
//! tree; nothing in here talks HTTP or draws HTML.

// Re-export shared types and adapter traits from lumo-types
pub use lumo_types::config_adapter;
pub use lumo_types::error;
pub use lumo_types::file_adapter;
pub use lumo_types::render_cache;
pub use lumo_types::texts;

// Feature crate re-exports
pub use lumo_core::settings;
pub use lumo_theme as theme;

// Local modules
pub mod admin;
pub mod prelude;

pub use crate::admin::{ThemeAdmin, ThemeAdminBuilder};

// vim: ts=4
