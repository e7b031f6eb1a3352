//! Host fixtures wiring the in-memory adapters

use std::sync::Arc;

use lumo::settings::SettingsTabs;
use lumo::{ThemeAdmin, ThemeAdminBuilder};

use super::adapters::{CountingInvalidator, MemoryConfigAdapter, MemoryFileAdapter};

/// A fake host holding the three collaborator adapters
pub struct TestHost {
	pub config: Arc<MemoryConfigAdapter>,
	pub files: Arc<MemoryFileAdapter>,
	pub invalidator: Arc<CountingInvalidator>,
}

impl TestHost {
	pub fn new() -> Self {
		Self {
			config: Arc::new(MemoryConfigAdapter::default()),
			files: Arc::new(MemoryFileAdapter::default()),
			invalidator: Arc::new(CountingInvalidator::default()),
		}
	}

	pub fn builder(&self) -> ThemeAdminBuilder {
		let mut builder = ThemeAdminBuilder::new();
		builder
			.config_adapter(self.config.clone())
			.file_adapter(self.files.clone())
			.render_cache_invalidator(self.invalidator.clone());
		builder
	}

	/// Builds the full admin surface, panicking on any declaration error
	pub async fn build(&self) -> ThemeAdmin {
		self.builder()
			.build()
			.await
			.expect("building the admin surface failed")
			.expect("full tree build returned None")
	}
}

impl Default for TestHost {
	fn default() -> Self {
		Self::new()
	}
}

/// Every registered setting key, in page order
pub fn all_keys(tabs: &SettingsTabs) -> Vec<String> {
	tabs.definitions().map(|def| def.key.to_string()).collect()
}
