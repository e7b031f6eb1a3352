//! Advanced settings tab

use lumo_core::settings::{Page, SettingDefinition, SettingKind, SettingValue};
use lumo_types::texts::Texts;

use crate::prelude::*;

pub fn build(texts: &dyn Texts) -> LmResult<Page> {
	let mut page = Page::new("theme_lumo_advanced", texts.text("advancedsettings"));

	// Raw stylesheet code compiled in before the preset content.
	page.add(
		SettingDefinition::builder("scsspre")
			.label(texts.text("rawscsspre"))
			.description(texts.text("rawscsspre_desc"))
			.kind(SettingKind::RawCode)
			.default(SettingValue::Str(String::new()))
			.updates_render_cache()
			.build()?,
	);

	// Raw stylesheet code compiled in after the preset content.
	page.add(
		SettingDefinition::builder("scss")
			.label(texts.text("rawscss"))
			.description(texts.text("rawscss_desc"))
			.kind(SettingKind::RawCode)
			.default(SettingValue::Str(String::new()))
			.updates_render_cache()
			.build()?,
	);

	// Analytics tracking id.
	page.add(
		SettingDefinition::builder("googleanalytics")
			.label(texts.text("googleanalytics"))
			.description(texts.text("googleanalyticsdesc"))
			.default(SettingValue::Str(String::new()))
			.updates_render_cache()
			.build()?,
	);

	Ok(page)
}

// vim: ts=4
