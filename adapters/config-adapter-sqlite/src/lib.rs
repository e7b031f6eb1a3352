//! SQLite-backed configuration adapter
//!
//! Persists theme settings as JSON strings in a single `settings` table.

use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use sqlx::{
	Row,
	sqlite::{self, SqlitePool},
};

use lumo::{config_adapter::ConfigAdapter, prelude::*};

mod schema;

use schema::init_db;

#[derive(Debug)]
pub struct ConfigAdapterSqlite {
	db: SqlitePool,
}

impl ConfigAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> LmResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl ConfigAdapter for ConfigAdapterSqlite {
	async fn read_value(&self, name: &str) -> LmResult<Option<serde_json::Value>> {
		let row = sqlx::query("SELECT value FROM settings WHERE name = ?")
			.bind(name)
			.fetch_optional(&self.db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		Ok(row.and_then(|r| {
			let value: Option<String> = r.get("value");
			value.and_then(|v| serde_json::from_str(&v).ok())
		}))
	}

	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> LmResult<()> {
		if let Some(val) = value {
			let value_str = val.to_string();
			sqlx::query("INSERT OR REPLACE INTO settings (name, value) VALUES (?, ?)")
				.bind(name)
				.bind(value_str)
				.execute(&self.db)
				.await
				.inspect_err(|err| warn!("DB: {:#?}", err))
				.map_err(|_| Error::DbError)?;
		} else {
			// Delete setting if value is None
			sqlx::query("DELETE FROM settings WHERE name = ?")
				.bind(name)
				.execute(&self.db)
				.await
				.inspect_err(|err| warn!("DB: {:#?}", err))
				.map_err(|_| Error::DbError)?;
		}

		Ok(())
	}

	async fn list_values(
		&self,
		prefix: Option<&str>,
	) -> LmResult<HashMap<String, serde_json::Value>> {
		let rows = if let Some(prefix) = prefix {
			sqlx::query("SELECT name, value FROM settings WHERE name LIKE ? || '%'")
				.bind(prefix)
				.fetch_all(&self.db)
				.await
				.inspect_err(|err| warn!("DB: {:#?}", err))
				.map_err(|_| Error::DbError)?
		} else {
			sqlx::query("SELECT name, value FROM settings")
				.fetch_all(&self.db)
				.await
				.inspect_err(|err| warn!("DB: {:#?}", err))
				.map_err(|_| Error::DbError)?
		};

		let mut settings = HashMap::new();
		for row in rows {
			let name: String = row.get("name");
			let value: Option<String> = row.get("value");
			settings.insert(
				name,
				value
					.and_then(|v| serde_json::from_str(&v).ok())
					.unwrap_or(serde_json::Value::Null),
			);
		}

		Ok(settings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	async fn adapter() -> (tempfile::TempDir, ConfigAdapterSqlite) {
		let dir = tempfile::tempdir().expect("tempdir");
		let adapter = ConfigAdapterSqlite::new(dir.path().join("settings.db"))
			.await
			.expect("adapter init");
		(dir, adapter)
	}

	#[tokio::test]
	async fn read_missing_yields_none() {
		let (_dir, adapter) = adapter().await;
		assert!(adapter.read_value("slidercount").await.expect("read").is_none());
	}

	#[tokio::test]
	async fn update_then_read_round_trips() {
		let (_dir, adapter) = adapter().await;

		adapter.update_value("slidercount", Some(json!(3))).await.expect("write");
		assert_eq!(adapter.read_value("slidercount").await.expect("read"), Some(json!(3)));

		adapter.update_value("slidercount", Some(json!(5))).await.expect("overwrite");
		assert_eq!(adapter.read_value("slidercount").await.expect("read"), Some(json!(5)));
	}

	#[tokio::test]
	async fn none_deletes_the_value() {
		let (_dir, adapter) = adapter().await;

		adapter.update_value("brandcolor", Some(json!("#fff"))).await.expect("write");
		adapter.update_value("brandcolor", None).await.expect("delete");
		assert!(adapter.read_value("brandcolor").await.expect("read").is_none());
	}

	#[tokio::test]
	async fn list_filters_by_prefix() {
		let (_dir, adapter) = adapter().await;

		adapter.update_value("sliderimage1", Some(json!("a.png"))).await.expect("write");
		adapter.update_value("slidertitle1", Some(json!("One"))).await.expect("write");
		adapter.update_value("brandcolor", Some(json!("#fff"))).await.expect("write");

		let all = adapter.list_values(None).await.expect("list");
		assert_eq!(all.len(), 3);

		let sliders = adapter.list_values(Some("slider")).await.expect("list");
		assert_eq!(sliders.len(), 2);
		assert!(sliders.contains_key("sliderimage1"));
		assert!(sliders.contains_key("slidertitle1"));
	}
}

// vim: ts=4
