//! Settings types and definitions
//!
//! The declaration model for the admin settings surface: typed values, form
//! control kinds, the definition builder, pages, and the tabbed container.
//! Declarations carry only data; rendering and persistence belong to the
//! host and the service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::prelude::*;

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from SettingDefinition
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	Str(String),
}

impl SettingValue {
	/// Get the type name for error messages
	pub fn type_name(&self) -> &'static str {
		match self {
			SettingValue::Bool(_) => "bool",
			SettingValue::Int(_) => "int",
			SettingValue::Str(_) => "string",
		}
	}
}

/// Insertion-ordered choice list for select settings.
///
/// Values are unique. Re-inserting an existing value re-asserts its label in
/// place without moving the entry, so discovered entries keep their position
/// when a built-in of the same name is appended afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Choices {
	entries: Vec<Choice>,
}

/// One offered choice: the stored value and its display label
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
	pub value: SettingValue,
	pub label: Box<str>,
}

impl Choices {
	pub fn new() -> Self {
		Self { entries: Vec::new() }
	}

	/// Consecutive integer choices labeled by their value (count selects)
	pub fn int_range(range: std::ops::RangeInclusive<i64>) -> Self {
		let mut choices = Self::new();
		for i in range {
			choices.insert(SettingValue::Int(i), i.to_string());
		}
		choices
	}

	/// Add a choice, or re-assert the label of an existing value in place
	pub fn insert(&mut self, value: SettingValue, label: impl Into<Box<str>>) {
		let label = label.into();
		if let Some(choice) = self.entries.iter_mut().find(|c| c.value == value) {
			choice.label = label;
		} else {
			self.entries.push(Choice { value, label });
		}
	}

	/// Whether a value is one of the offered choices
	pub fn offers(&self, value: &SettingValue) -> bool {
		self.entries.iter().any(|c| &c.value == value)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Choice> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Upload constraints for stored-file settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConstraints {
	/// Accepted filename extensions, including the leading dot
	pub accepted_types: Box<[Box<str>]>,
	/// Maximum number of files in the setting's area
	pub max_files: u32,
}

impl FileConstraints {
	pub fn new(accepted_types: &[&str], max_files: u32) -> Self {
		Self {
			accepted_types: accepted_types.iter().map(|t| Box::from(*t)).collect(),
			max_files,
		}
	}

	/// Case-insensitive extension check
	pub fn allows(&self, filename: &str) -> bool {
		let lower = filename.to_ascii_lowercase();
		self.accepted_types.iter().any(|ext| lower.ends_with(&ext.to_ascii_lowercase()))
	}
}

/// Form control kind; carries only the data the host needs to render,
/// validate, and persist the control
#[derive(Debug, Clone, PartialEq)]
pub enum SettingKind {
	/// Static text block, stores no value
	Heading,
	/// Single-line text input
	Text,
	/// Multi-line plain text
	TextArea,
	/// HTML editor
	RichText,
	/// On/off toggle
	Checkbox,
	/// One value out of a fixed choice list
	Select { choices: Choices },
	/// Color value; an empty string means "inherit from the preset"
	ColorPicker,
	/// Admin-uploaded file(s) in a dedicated storage area
	StoredFile { area: Box<str>, constraints: FileConstraints },
	/// Raw stylesheet code injected into the compiled theme
	RawCode,
}

impl SettingKind {
	/// Checks that a value fits this control kind.
	/// Returns the rejection reason for error messages.
	pub fn validate_value(&self, value: &SettingValue) -> Result<(), String> {
		match self {
			SettingKind::Heading => Err("headings store no value".into()),
			SettingKind::StoredFile { .. } => {
				Err("stored-file settings are managed through uploads".into())
			}
			SettingKind::Checkbox => match value {
				SettingValue::Bool(_) => Ok(()),
				v => Err(format!("expected bool, got {}", v.type_name())),
			},
			SettingKind::Select { choices } => {
				if choices.offers(value) {
					Ok(())
				} else {
					Err("value is not an offered choice".into())
				}
			}
			SettingKind::Text
			| SettingKind::TextArea
			| SettingKind::RichText
			| SettingKind::ColorPicker
			| SettingKind::RawCode => match value {
				SettingValue::Str(_) => Ok(()),
				v => Err(format!("expected string, got {}", v.type_name())),
			},
		}
	}
}

/// Setting definition - declarative metadata for one admin form control
#[derive(Debug, Clone, PartialEq)]
pub struct SettingDefinition {
	/// Unique key within the whole registry (e.g. "sliderimage2")
	pub key: Box<str>,

	/// Human-readable label shown next to the control
	pub label: Box<str>,

	/// Help text shown under the control
	pub description: Box<str>,

	/// Form control kind
	pub kind: SettingKind,

	/// Value used while nothing is stored yet.
	/// Once rendered, the stored value persists independently of this.
	pub default: Option<SettingValue>,

	/// Fire the host's render cache hook after a successful write
	pub invalidates_render_cache: bool,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(key: impl Into<Box<str>>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(key)
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	key: Box<str>,
	label: Option<Box<str>>,
	description: Option<Box<str>>,
	kind: SettingKind,
	default: Option<SettingValue>,
	invalidates_render_cache: bool,
}

impl SettingDefinitionBuilder {
	pub fn new(key: impl Into<Box<str>>) -> Self {
		Self {
			key: key.into(),
			label: None,
			description: None,
			kind: SettingKind::Text,
			default: None,
			invalidates_render_cache: false,
		}
	}

	pub fn label(mut self, label: impl Into<Box<str>>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Set the description (required)
	pub fn description(mut self, description: impl Into<Box<str>>) -> Self {
		self.description = Some(description.into());
		self
	}

	/// Set the form control kind (defaults to Text)
	pub fn kind(mut self, kind: SettingKind) -> Self {
		self.kind = kind;
		self
	}

	/// Set the default value (optional)
	pub fn default(mut self, value: SettingValue) -> Self {
		self.default = Some(value);
		self
	}

	/// Fire the render cache hook when this setting changes
	pub fn updates_render_cache(mut self) -> Self {
		self.invalidates_render_cache = true;
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> LmResult<SettingDefinition> {
		let description = self
			.description
			.ok_or_else(|| Error::ConfigError(format!("Setting '{}' needs a description", self.key)))?;

		// The default must fit the declared control kind; selects also
		// require the default to be one of the offered choices.
		if let Some(default) = &self.default {
			if let Err(reason) = self.kind.validate_value(default) {
				return Err(Error::ConfigError(format!(
					"Setting '{}' has an invalid default: {}",
					self.key, reason
				)));
			}
		}

		Ok(SettingDefinition {
			key: self.key,
			label: self.label.unwrap_or_default(),
			description,
			kind: self.kind,
			default: self.default,
			invalidates_render_cache: self.invalidates_render_cache,
		})
	}
}

/// An ordered, labeled group of settings shown as one admin tab
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
	key: Box<str>,
	label: Box<str>,
	settings: Vec<SettingDefinition>,
}

impl Page {
	pub fn new(key: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Self {
		Self { key: key.into(), label: label.into(), settings: Vec::new() }
	}

	/// Appends a setting and returns a reference to the stored copy, so a
	/// flag can still be adjusted after the add.
	pub fn add(&mut self, setting: SettingDefinition) -> &mut SettingDefinition {
		debug!("Adding setting: {}", setting.key);
		self.settings.push(setting);
		let last = self.settings.len() - 1;
		&mut self.settings[last]
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn settings(&self) -> &[SettingDefinition] {
		&self.settings
	}

	pub fn len(&self) -> usize {
		self.settings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.settings.is_empty()
	}
}

/// Top-level tabbed container of settings pages, returned to the host's
/// admin UI renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsTabs {
	key: Box<str>,
	label: Box<str>,
	pages: Vec<Page>,
	index: HashMap<Box<str>, (usize, usize)>,
}

impl SettingsTabs {
	pub fn new(key: impl Into<Box<str>>, label: impl Into<Box<str>>) -> Self {
		Self { key: key.into(), label: label.into(), pages: Vec::new(), index: HashMap::new() }
	}

	/// Registers a page. Setting keys must be unique across the whole
	/// container, not just within one page.
	pub fn add_page(&mut self, page: Page) -> LmResult<()> {
		for (idx, setting) in page.settings().iter().enumerate() {
			if self.index.contains_key(&setting.key) {
				return Err(Error::ConfigError(format!(
					"Setting '{}' is already registered",
					setting.key
				)));
			}
			self.index.insert(setting.key.clone(), (self.pages.len(), idx));
		}

		debug!("Registered settings page: {} ({} settings)", page.key(), page.len());
		self.pages.push(page);
		Ok(())
	}

	/// Get a setting definition by key
	pub fn get(&self, key: &str) -> Option<&SettingDefinition> {
		let (page, setting) = *self.index.get(key)?;
		self.pages.get(page)?.settings().get(setting)
	}

	/// All definitions in page order
	pub fn definitions(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.pages.iter().flat_map(|p| p.settings().iter())
	}

	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	/// Total number of registered settings
	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}
}


// vim: ts=4
