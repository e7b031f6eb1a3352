//! Configuration registry builder
//!
//! Assembles the tabbed settings container. Everything is built fresh per
//! admin page request and discarded after rendering; only the string keys
//! persist, in the host's configuration store.

use lumo_core::settings::{Choices, Page, SettingValue, SettingsTabs};
use lumo_types::config_adapter::ConfigAdapter;
use lumo_types::file_adapter::FileAdapter;
use lumo_types::texts::Texts;

use crate::pages;
use crate::prelude::*;

/// Storage area holding admin-uploaded preset files
pub const PRESET_AREA: &str = "preset";

/// Item id used for every theme file area
pub const THEME_ITEM_ID: u32 = 0;

/// Builds the full tabbed settings container.
///
/// Returns `Ok(None)` without touching any collaborator when the host is
/// not rendering the full administration tree; most page loads take this
/// path.
pub async fn build_settings(
	full_tree: bool,
	config: &dyn ConfigAdapter,
	files: &dyn FileAdapter,
	texts: &dyn Texts,
) -> LmResult<Option<SettingsTabs>> {
	if !full_tree {
		return Ok(None);
	}

	let mut tabs = SettingsTabs::new("theme_lumo", texts.text("configtitle"));

	tabs.add_page(pages::general::build(files, texts).await?)?;
	tabs.add_page(pages::advanced::build(texts)?)?;
	tabs.add_page(pages::frontpage::build(config, texts).await?)?;
	tabs.add_page(pages::footer::build(texts)?)?;
	tabs.add_page(pages::forum::build(texts)?)?;

	info!("Built theme settings: {} pages, {} settings", tabs.pages().len(), tabs.len());

	Ok(Some(tabs))
}

/// Builds the preset select choices from previously uploaded preset files.
///
/// Discovered files come first, then the two built-in presets are appended.
/// An upload claiming a built-in name keeps its position and is never
/// duplicated; zero uploads yield exactly the two built-ins.
pub async fn discover_preset_choices(files: &dyn FileAdapter) -> LmResult<Choices> {
	let mut choices = Choices::new();

	for file in files.list_area_files(PRESET_AREA, THEME_ITEM_ID).await? {
		choices.insert(SettingValue::Str(file.filename.to_string()), file.filename);
	}

	// These are the built in presets.
	choices.insert(SettingValue::Str("default.scss".into()), "default.scss");
	choices.insert(SettingValue::Str("plain.scss".into()), "plain.scss");

	Ok(choices)
}

/// Reads the stored repeat count at `count_key` and emits one indexed field
/// block per index `1..=count`.
///
/// An absent or zero count substitutes `default_count`. The select list
/// offered to the admin caps the count, but the loop itself enforces no
/// upper bound: a stored value above the cap still expands that many
/// blocks. A changed count only takes effect on the next build; expansion
/// is not reactive.
pub async fn expand_repeat_group<F>(
	config: &dyn ConfigAdapter,
	count_key: &str,
	default_count: i64,
	page: &mut Page,
	mut emit: F,
) -> LmResult<()>
where
	F: FnMut(&mut Page, i64) -> LmResult<()>,
{
	let stored = config.read_value(count_key).await?.and_then(|v| v.as_i64());
	let count = match stored {
		None | Some(0) => default_count,
		Some(n) => n,
	};

	debug!("Expanding repeat group '{}': {} block(s)", count_key, count.max(0));

	for index in 1..=count {
		emit(page, index)?;
	}

	Ok(())
}

// vim: ts=4
