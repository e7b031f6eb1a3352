//! General settings tab
//!
//! Branding, the preset selection, and the color overrides. The preset
//! select is the one dynamic part: its choices come from previously
//! uploaded preset files plus the built-ins.

use lumo_core::settings::{
	Choices, FileConstraints, Page, SettingDefinition, SettingKind, SettingValue,
};
use lumo_types::file_adapter::FileAdapter;
use lumo_types::texts::Texts;

use crate::builder::discover_preset_choices;
use crate::pages::WEB_IMAGE_TYPES;
use crate::prelude::*;

pub async fn build(files: &dyn FileAdapter, texts: &dyn Texts) -> LmResult<Page> {
	let mut page = Page::new("theme_lumo_general", texts.text("generalsettings"));

	// Logo file setting.
	page.add(
		SettingDefinition::builder("logo")
			.label(texts.text("logo"))
			.description(texts.text("logodesc"))
			.kind(SettingKind::StoredFile {
				area: "logo".into(),
				constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
			})
			.updates_render_cache()
			.build()?,
	);

	// Favicon setting.
	page.add(
		SettingDefinition::builder("favicon")
			.label(texts.text("favicon"))
			.description(texts.text("favicondesc"))
			.kind(SettingKind::StoredFile {
				area: "favicon".into(),
				constraints: FileConstraints::new(&[".ico"], 1),
			})
			.updates_render_cache()
			.build()?,
	);

	// Preset select, over the discovered preset files.
	page.add(
		SettingDefinition::builder("preset")
			.label(texts.text("preset"))
			.description(texts.text("preset_desc"))
			.kind(SettingKind::Select { choices: discover_preset_choices(files).await? })
			.default(SettingValue::Str("default.scss".into()))
			.updates_render_cache()
			.build()?,
	);

	// Preset files setting. Attaching files does not invalidate anything
	// by itself; only selecting one does.
	page.add(
		SettingDefinition::builder("presetfiles")
			.label(texts.text("presetfiles"))
			.description(texts.text("presetfiles_desc"))
			.kind(SettingKind::StoredFile {
				area: "preset".into(),
				constraints: FileConstraints::new(&[".scss"], 20),
			})
			.build()?,
	);

	// Login page background image.
	page.add(
		SettingDefinition::builder("loginbgimg")
			.label(texts.text("loginbgimg"))
			.description(texts.text("loginbgimg_desc"))
			.kind(SettingKind::StoredFile {
				area: "loginbgimg".into(),
				constraints: FileConstraints::new(&[".png", ".jpg", ".svg"], 1),
			})
			.updates_render_cache()
			.build()?,
	);

	// Color overrides. Empty defaults: the effective color comes from the
	// selected preset until the admin picks one.
	for (key, desc_key) in [
		("brandcolor", "brandcolor_desc"),
		("navbarheadercolor", "navbarheadercolor_desc"),
		("navbarbg", "navbarbg_desc"),
		("navbarbghover", "navbarbghover_desc"),
	] {
		page.add(
			SettingDefinition::builder(key)
				.label(texts.text(key))
				.description(texts.text(desc_key))
				.kind(SettingKind::ColorPicker)
				.default(SettingValue::Str(String::new()))
				.updates_render_cache()
				.build()?,
		);
	}

	// Course format option.
	let mut presentation = Choices::new();
	presentation.insert(SettingValue::Int(1), texts.text("coursedefault"));
	presentation.insert(SettingValue::Int(2), texts.text("coursecover"));
	page.add(
		SettingDefinition::builder("coursepresentation")
			.label(texts.text("coursepresentation"))
			.description(texts.text("coursepresentationdesc"))
			.kind(SettingKind::Select { choices: presentation })
			.default(SettingValue::Int(1))
			.updates_render_cache()
			.build()?,
	);

	page.add(
		SettingDefinition::builder("courselistview")
			.label(texts.text("courselistview"))
			.description(texts.text("courselistviewdesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	Ok(page)
}

// vim: ts=4
