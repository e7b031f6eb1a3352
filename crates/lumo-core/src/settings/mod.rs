//! Settings subsystem types and service

pub mod service;
pub mod types;

pub use service::SettingsService;
pub use types::{
	Choice, Choices, FileConstraints, Page, SettingDefinition, SettingDefinitionBuilder,
	SettingKind, SettingValue, SettingsTabs,
};

// vim: ts=4
