//! Adapter that manages admin-uploaded theme files
//!
//! Files live in named logical areas ("logo", "preset", "sliderimage1", ...)
//! addressed by an item id. The theme only ever uses item id 0; the parameter
//! exists so hosts that shard uploads per context can reuse the trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Metadata of one stored file within an area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileInfo {
	pub filename: Box<str>,
	pub size: u64,
}

#[async_trait]
pub trait FileAdapter: Debug + Send + Sync {
	/// Lists the files stored in a logical area, in filename order
	async fn list_area_files(&self, area: &str, item_id: u32) -> LmResult<Vec<StoredFileInfo>>;

	/// Stores a file into an area from a buffer, replacing any previous
	/// file with the same name
	async fn store_file(
		&self,
		area: &str,
		item_id: u32,
		filename: &str,
		data: &[u8],
	) -> LmResult<()>;

	/// Reads a stored file
	async fn read_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<Box<[u8]>>;

	/// Removes a stored file
	async fn remove_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<()>;
}

// vim: ts=4
