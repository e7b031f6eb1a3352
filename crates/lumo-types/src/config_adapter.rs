//! Adapter that persists theme configuration as a key-value store
//!
//! Values cross the adapter boundary as JSON so backends stay schema-free.
//! Each setting key is independently owned; last write wins.

use async_trait::async_trait;
use std::{collections::HashMap, fmt::Debug};

use crate::prelude::*;

#[async_trait]
pub trait ConfigAdapter: Debug + Send + Sync {
	/// Reads a single configuration value by name
	async fn read_value(&self, name: &str) -> LmResult<Option<serde_json::Value>>;

	/// Updates or creates a configuration value; `None` deletes it
	async fn update_value(&self, name: &str, value: Option<serde_json::Value>) -> LmResult<()>;

	/// Lists stored values, optionally filtered by a name prefix
	async fn list_values(&self, prefix: Option<&str>)
		-> LmResult<HashMap<String, serde_json::Value>>;
}

// vim: ts=4
