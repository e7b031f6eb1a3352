//! In-memory adapter implementations for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use lumo::config_adapter::ConfigAdapter;
use lumo::error::{Error, LmResult};
use lumo::file_adapter::{FileAdapter, StoredFileInfo};
use lumo::render_cache::RenderCacheInvalidator;

/// Key-value config store backed by a HashMap. Counts reads so tests can
/// assert the cheap no-op path touches nothing.
#[derive(Debug, Default)]
pub struct MemoryConfigAdapter {
	values: RwLock<HashMap<String, serde_json::Value>>,
	reads: AtomicU32,
}

impl MemoryConfigAdapter {
	pub fn reads(&self) -> u32 {
		self.reads.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl ConfigAdapter for MemoryConfigAdapter {
	async fn read_value(&self, name: &str) -> LmResult<Option<serde_json::Value>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		Ok(self.values.read().get(name).cloned())
	}

	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> LmResult<()> {
		match value {
			Some(value) => {
				self.values.write().insert(name.into(), value);
			}
			None => {
				self.values.write().remove(name);
			}
		}
		Ok(())
	}

	async fn list_values(
		&self,
		prefix: Option<&str>,
	) -> LmResult<HashMap<String, serde_json::Value>> {
		let values = self.values.read();
		Ok(values
			.iter()
			.filter(|(k, _)| prefix.is_none_or(|p| k.starts_with(p)))
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect())
	}
}

/// File storage backed by a HashMap of areas. Counts list calls so tests
/// can assert the cheap no-op path touches nothing.
#[derive(Debug, Default)]
pub struct MemoryFileAdapter {
	areas: RwLock<HashMap<(String, u32), Vec<(String, Vec<u8>)>>>,
	lists: AtomicU32,
}

impl MemoryFileAdapter {
	pub fn lists(&self) -> u32 {
		self.lists.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl FileAdapter for MemoryFileAdapter {
	async fn list_area_files(&self, area: &str, item_id: u32) -> LmResult<Vec<StoredFileInfo>> {
		self.lists.fetch_add(1, Ordering::SeqCst);
		let areas = self.areas.read();
		let mut files: Vec<StoredFileInfo> = areas
			.get(&(area.into(), item_id))
			.map(|entries| {
				entries
					.iter()
					.map(|(name, data)| StoredFileInfo {
						filename: name.as_str().into(),
						size: data.len() as u64,
					})
					.collect()
			})
			.unwrap_or_default();
		files.sort_by(|a, b| a.filename.cmp(&b.filename));
		Ok(files)
	}

	async fn store_file(
		&self,
		area: &str,
		item_id: u32,
		filename: &str,
		data: &[u8],
	) -> LmResult<()> {
		let mut areas = self.areas.write();
		let entries = areas.entry((area.into(), item_id)).or_default();
		entries.retain(|(name, _)| name != filename);
		entries.push((filename.into(), data.to_vec()));
		Ok(())
	}

	async fn read_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<Box<[u8]>> {
		let areas = self.areas.read();
		areas
			.get(&(area.into(), item_id))
			.and_then(|entries| entries.iter().find(|(name, _)| name == filename))
			.map(|(_, data)| data.clone().into_boxed_slice())
			.ok_or(Error::NotFound)
	}

	async fn remove_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<()> {
		let mut areas = self.areas.write();
		if let Some(entries) = areas.get_mut(&(area.into(), item_id)) {
			entries.retain(|(name, _)| name != filename);
		}
		Ok(())
	}
}

/// Render cache hook that only counts how often it fired
#[derive(Debug, Default)]
pub struct CountingInvalidator {
	resets: AtomicU32,
}

impl CountingInvalidator {
	pub fn resets(&self) -> u32 {
		self.resets.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RenderCacheInvalidator for CountingInvalidator {
	async fn invalidate(&self) -> LmResult<()> {
		self.resets.fetch_add(1, Ordering::SeqCst);
		Ok(())
	}
}
