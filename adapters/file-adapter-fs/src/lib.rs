//! Filesystem-backed file storage adapter
//!
//! Admin uploads live under `base_dir/<item_id>/<area>/<filename>`. Areas
//! are flat; the theme never nests uploads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::{
	fs::{File, create_dir_all, metadata, read_dir, remove_file},
	io::{AsyncReadExt, AsyncWriteExt},
};

use lumo::{
	file_adapter::{FileAdapter, StoredFileInfo},
	prelude::*,
};

/// Calculates the directory of a storage area
fn area_dir(base_dir: &Path, area: &str, item_id: u32) -> LmResult<PathBuf> {
	if area.is_empty() || !area.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
		Err(Error::Parse)?
	}

	Ok(PathBuf::from(base_dir).join(item_id.to_string()).join(area))
}

fn file_path(base_dir: &Path, area: &str, item_id: u32, filename: &str) -> LmResult<PathBuf> {
	if filename.is_empty() || filename.contains(['/', '\\']) || filename.contains("..") {
		Err(Error::Parse)?
	}

	Ok(area_dir(base_dir, area, item_id)?.join(filename))
}

#[derive(Debug)]
pub struct FileAdapterFs {
	base_dir: Box<Path>,
}

impl FileAdapterFs {
	pub async fn new(base_dir: Box<Path>) -> LmResult<Self> {
		create_dir_all(&base_dir).await?;
		Ok(Self { base_dir })
	}
}

#[async_trait]
impl FileAdapter for FileAdapterFs {
	/// Lists the files of an area; a never-written area is simply empty
	async fn list_area_files(&self, area: &str, item_id: u32) -> LmResult<Vec<StoredFileInfo>> {
		let dir = area_dir(&self.base_dir, area, item_id)?;
		let mut entries = match read_dir(&dir).await {
			Ok(entries) => entries,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(err) => Err(err)?,
		};

		let mut files = Vec::new();
		while let Some(entry) = entries.next_entry().await? {
			let file_metadata = entry.metadata().await?;
			if !file_metadata.is_file() {
				continue;
			}
			files.push(StoredFileInfo {
				filename: entry.file_name().to_string_lossy().into(),
				size: file_metadata.len(),
			});
		}
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
		let path = file_path(&self.base_dir, area, item_id, filename)?;
		info!("store_file: {:?}", path);
		create_dir_all(area_dir(&self.base_dir, area, item_id)?).await?;

		let mut file = File::create(&path).await?;
		file.write_all(data).await?;
		file.sync_all().await?;

		Ok(())
	}

	async fn read_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<Box<[u8]>> {
		let path = file_path(&self.base_dir, area, item_id, filename)?;
		let mut file = File::open(&path).await.map_err(|_| Error::NotFound)?;
		let mut buf: Vec<u8> = Vec::new();
		file.read_to_end(&mut buf).await?;

		Ok(buf.into_boxed_slice())
	}

	async fn remove_file(&self, area: &str, item_id: u32, filename: &str) -> LmResult<()> {
		let path = file_path(&self.base_dir, area, item_id, filename)?;
		if metadata(&path).await.is_err() {
			return Err(Error::NotFound);
		}
		remove_file(&path).await?;

		Ok(())
	}
}

#[cfg(test)]
mod test {
	use std::path::PathBuf;

	use super::*;

	fn fs_adapter(dir: &tempfile::TempDir) -> FileAdapterFs {
		FileAdapterFs { base_dir: Box::from(dir.path()) }
	}

	#[test]
	fn test_area_dir() {
		let dir = area_dir(Path::new("some_dir"), "sliderimage1", 0).unwrap_or_default();
		assert_eq!(dir, PathBuf::from("some_dir/0/sliderimage1"));
	}

	#[test]
	fn rejects_traversal_in_filenames() {
		assert!(file_path(Path::new("d"), "logo", 0, "../../etc/passwd").is_err());
		assert!(file_path(Path::new("d"), "logo", 0, "a/b.png").is_err());
		assert!(file_path(Path::new("d"), "../logo", 0, "a.png").is_err());
	}

	#[tokio::test]
	async fn store_list_read_remove_round_trip() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = fs_adapter(&dir);

		adapter.store_file("preset", 0, "custom.scss", b"$x: 1;").await.expect("store");
		adapter.store_file("preset", 0, "another.scss", b"$y: 2;").await.expect("store");

		let files = adapter.list_area_files("preset", 0).await.expect("list");
		let names: Vec<_> = files.iter().map(|f| f.filename.as_ref()).collect();
		assert_eq!(names, ["another.scss", "custom.scss"]);

		let data = adapter.read_file("preset", 0, "custom.scss").await.expect("read");
		assert_eq!(data.as_ref(), b"$x: 1;");

		adapter.remove_file("preset", 0, "custom.scss").await.expect("remove");
		let files = adapter.list_area_files("preset", 0).await.expect("list");
		assert_eq!(files.len(), 1);
	}

	#[tokio::test]
	async fn unwritten_area_lists_empty() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = fs_adapter(&dir);

		let files = adapter.list_area_files("sliderimage7", 0).await.expect("list");
		assert!(files.is_empty());
	}

	#[tokio::test]
	async fn read_missing_file_is_not_found() {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = fs_adapter(&dir);

		let result = adapter.read_file("logo", 0, "logo.png").await;
		assert!(matches!(result, Err(Error::NotFound)));
	}
}

// vim: ts=4
