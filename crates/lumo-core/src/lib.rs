//! Settings framework for the Lumo theme.
//!
//! This crate holds the declaration model (values, kinds, definitions, pages,
//! the tabbed container) and the settings service that reads and persists
//! values through the host's adapters. The theme's actual declarations live
//! in `lumo-theme`; nothing in here knows about any concrete setting.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod prelude;
pub mod settings;

pub use settings::{
	Choice, Choices, FileConstraints, Page, SettingDefinition, SettingDefinitionBuilder,
	SettingKind, SettingValue, SettingsService, SettingsTabs,
};

// vim: ts=4
