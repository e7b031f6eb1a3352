//! Settings service - reads and persists setting values for the host
//!
//! The service is the host-facing persistence layer around the built
//! registry: values resolve stored -> default, writes are validated against
//! the declaration, and settings flagged with `invalidates_render_cache`
//! fire the injected invalidation hook after a successful write.

use std::sync::Arc;

use lumo_types::config_adapter::ConfigAdapter;
use lumo_types::file_adapter::FileAdapter;
use lumo_types::render_cache::RenderCacheInvalidator;

use crate::prelude::*;
use crate::settings::types::{SettingKind, SettingValue, SettingsTabs};

pub struct SettingsService {
	registry: Arc<SettingsTabs>,
	config: Arc<dyn ConfigAdapter>,
	files: Arc<dyn FileAdapter>,
	invalidator: Arc<dyn RenderCacheInvalidator>,
}

impl SettingsService {
	pub fn new(
		registry: Arc<SettingsTabs>,
		config: Arc<dyn ConfigAdapter>,
		files: Arc<dyn FileAdapter>,
		invalidator: Arc<dyn RenderCacheInvalidator>,
	) -> Self {
		Self { registry, config, files, invalidator }
	}

	/// Get a setting value, falling back to the declared default.
	/// An absent stored value is never an error while a default exists.
	pub async fn get(&self, key: &str) -> LmResult<SettingValue> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Some(json_value) = self.config.read_value(key).await? {
			let value = serde_json::from_value::<SettingValue>(json_value).map_err(|e| {
				Error::ValidationError(format!("Invalid stored value for '{}': {}", key, e))
			})?;
			return Ok(value);
		}

		match &def.default {
			Some(default) => Ok(default.clone()),
			None => Err(Error::NotFound),
		}
	}

	/// Set a setting value with validation against the declaration
	pub async fn set(&self, key: &str, value: SettingValue) -> LmResult<()> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		if let Err(reason) = def.kind.validate_value(&value) {
			return Err(Error::ValidationError(format!("Setting '{}': {}", key, reason)));
		}

		let json_value = serde_json::to_value(&value)?;
		self.config.update_value(key, Some(json_value)).await?;

		info!("Setting '{}' updated", key);

		if def.invalidates_render_cache {
			self.invalidator.invalidate().await?;
		}

		Ok(())
	}

	/// Delete a stored value; reads fall back to the default afterwards
	pub async fn delete(&self, key: &str) -> LmResult<()> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		self.config.update_value(key, None).await?;

		info!("Setting '{}' deleted", key);

		if def.invalidates_render_cache {
			self.invalidator.invalidate().await?;
		}

		Ok(())
	}

	/// Store an uploaded file for a stored-file setting, enforcing the
	/// declaration's upload constraints
	pub async fn store_upload(&self, key: &str, filename: &str, data: &[u8]) -> LmResult<()> {
		let def = self
			.registry
			.get(key)
			.ok_or_else(|| Error::ValidationError(format!("Unknown setting: {}", key)))?;

		let SettingKind::StoredFile { area, constraints } = &def.kind else {
			return Err(Error::ValidationError(format!(
				"Setting '{}' does not accept file uploads",
				key
			)));
		};

		if !constraints.allows(filename) {
			return Err(Error::ValidationError(format!(
				"File type not accepted for '{}': {}",
				key, filename
			)));
		}

		// Replacing a file of the same name does not occupy a new slot
		let existing = self.files.list_area_files(area, 0).await?;
		let replaces = existing.iter().any(|f| f.filename.as_ref() == filename);
		if !replaces && existing.len() as u32 >= constraints.max_files {
			return Err(Error::ValidationError(format!(
				"Setting '{}' accepts at most {} file(s)",
				key, constraints.max_files
			)));
		}

		self.files.store_file(area, 0, filename, data).await?;

		info!("Stored upload for '{}': {}", key, filename);

		if def.invalidates_render_cache {
			self.invalidator.invalidate().await?;
		}

		Ok(())
	}

	/// Type-safe getters
	pub async fn get_str(&self, key: &str) -> LmResult<String> {
		match self.get(key).await? {
			SettingValue::Str(s) => Ok(s),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not a string, got {}",
				key,
				v.type_name()
			))),
		}
	}

	pub async fn get_int(&self, key: &str) -> LmResult<i64> {
		match self.get(key).await? {
			SettingValue::Int(i) => Ok(i),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not an integer, got {}",
				key,
				v.type_name()
			))),
		}
	}

	pub async fn get_bool(&self, key: &str) -> LmResult<bool> {
		match self.get(key).await? {
			SettingValue::Bool(b) => Ok(b),
			v => Err(Error::ValidationError(format!(
				"Setting '{}' is not a boolean, got {}",
				key,
				v.type_name()
			))),
		}
	}

	/// Reference to the built registry (for the host renderer)
	pub fn registry(&self) -> &Arc<SettingsTabs> {
		&self.registry
	}
}


// vim: ts=4
