//! Admin surface builder - wires the host adapters and builds the tree

use std::sync::Arc;

use lumo_core::settings::{SettingsService, SettingsTabs};
use lumo_theme::builder::build_settings;
use lumo_types::config_adapter::ConfigAdapter;
use lumo_types::file_adapter::FileAdapter;
use lumo_types::render_cache::RenderCacheInvalidator;
use lumo_types::texts::Texts;

use crate::prelude::*;

/// The assembled admin surface: the settings tree for the host renderer,
/// and the service that persists edits back
pub struct ThemeAdmin {
	pub tabs: Arc<SettingsTabs>,
	pub settings: SettingsService,
}

pub struct ThemeAdminBuilder {
	full_tree: bool,
	config_adapter: Option<Arc<dyn ConfigAdapter>>,
	file_adapter: Option<Arc<dyn FileAdapter>>,
	invalidator: Option<Arc<dyn RenderCacheInvalidator>>,
	texts: Arc<dyn Texts>,
}

impl ThemeAdminBuilder {
	pub fn new() -> Self {
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();

		ThemeAdminBuilder {
			full_tree: true,
			config_adapter: None,
			file_adapter: None,
			invalidator: None,
			texts: Arc::new(lumo_theme::EnglishTexts),
		}
	}

	/// Whether the host is rendering the full administration tree.
	/// `false` makes `build` a cheap no-op returning `None`.
	pub fn full_tree(&mut self, full_tree: bool) -> &mut Self {
		self.full_tree = full_tree;
		self
	}

	// Adapters
	pub fn config_adapter(&mut self, config_adapter: Arc<dyn ConfigAdapter>) -> &mut Self {
		self.config_adapter = Some(config_adapter);
		self
	}

	pub fn file_adapter(&mut self, file_adapter: Arc<dyn FileAdapter>) -> &mut Self {
		self.file_adapter = Some(file_adapter);
		self
	}

	pub fn render_cache_invalidator(
		&mut self,
		invalidator: Arc<dyn RenderCacheInvalidator>,
	) -> &mut Self {
		self.invalidator = Some(invalidator);
		self
	}

	/// Replace the built-in English catalog
	pub fn texts(&mut self, texts: Arc<dyn Texts>) -> &mut Self {
		self.texts = texts;
		self
	}

	/// Builds the admin surface. Returns `None` when the full-tree flag is
	/// off; errors when an adapter is missing or a declaration is broken.
	pub async fn build(&mut self) -> LmResult<Option<ThemeAdmin>> {
		let config = self
			.config_adapter
			.clone()
			.ok_or_else(|| Error::ConfigError("config adapter is required".into()))?;
		let files = self
			.file_adapter
			.clone()
			.ok_or_else(|| Error::ConfigError("file adapter is required".into()))?;
		let invalidator = self
			.invalidator
			.clone()
			.ok_or_else(|| Error::ConfigError("render cache invalidator is required".into()))?;

		let tabs =
			build_settings(self.full_tree, config.as_ref(), files.as_ref(), self.texts.as_ref())
				.await?;
		let Some(tabs) = tabs else {
			debug!("Skipping theme settings: not rendering the full administration tree");
			return Ok(None);
		};

		let tabs = Arc::new(tabs);
		let settings = SettingsService::new(tabs.clone(), config, files, invalidator);

		Ok(Some(ThemeAdmin { tabs, settings }))
	}
}

impl Default for ThemeAdminBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4
