//! Footer settings tab

use lumo_core::settings::{FileConstraints, Page, SettingDefinition, SettingKind, SettingValue};
use lumo_types::texts::Texts;

use crate::prelude::*;

pub fn build(texts: &dyn Texts) -> LmResult<Page> {
	let mut page = Page::new("theme_lumo_footer", texts.text("footersettings"));

	page.add(
		SettingDefinition::builder("getintouchcontent")
			.label(texts.text("getintouchcontent"))
			.description(texts.text("getintouchcontentdesc"))
			.kind(SettingKind::TextArea)
			.default(SettingValue::Str("Lumo Learning".into()))
			.updates_render_cache()
			.build()?,
	);

	// Contact lines.
	for (key, desc_key, default) in [
		("website", "websitedesc", "https://lumotheme.org"),
		("mobile", "mobiledesc", "Mobile : +55 (98) 00123-45678"),
		("mail", "maildesc", "hello@lumotheme.org"),
	] {
		page.add(
			SettingDefinition::builder(key)
				.label(texts.text(key))
				.description(texts.text(desc_key))
				.default(SettingValue::Str(default.into()))
				.updates_render_cache()
				.build()?,
		);
	}

	// Social network urls, hidden in the footer while left empty.
	for key in ["facebook", "twitter", "googleplus", "linkedin", "youtube", "instagram"] {
		page.add(
			SettingDefinition::builder(key)
				.label(texts.text(key))
				.description(texts.text(&format!("{key}desc")))
				.default(SettingValue::Str(String::new()))
				.updates_render_cache()
				.build()?,
		);
	}

	// Top footer background image.
	page.add(
		SettingDefinition::builder("topfooterimg")
			.label(texts.text("topfooterimg"))
			.description(texts.text("topfooterimgdesc"))
			.kind(SettingKind::StoredFile {
				area: "topfooterimg".into(),
				constraints: FileConstraints::new(&[".png", ".jpg", ".svg"], 1),
			})
			.updates_render_cache()
			.build()?,
	);

	// Disable bottom footer. The cache flag is set through the reference
	// returned by `add`, after the setting is already on the page.
	let setting = page.add(
		SettingDefinition::builder("disablebottomfooter")
			.label(texts.text("disablebottomfooter"))
			.description(texts.text("disablebottomfooterdesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);
	setting.invalidates_render_cache = true;

	Ok(page)
}

// vim: ts=4
