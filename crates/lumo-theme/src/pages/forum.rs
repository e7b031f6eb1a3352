//! Forum settings tab
//!
//! Custom templates for forum notification mails sent in the theme's look.

use lumo_core::settings::{Page, SettingDefinition, SettingKind, SettingValue};
use lumo_types::texts::Texts;

use crate::prelude::*;

pub fn build(texts: &dyn Texts) -> LmResult<Page> {
	let mut page = Page::new("theme_lumo_forum", texts.text("forumsettings"));

	page.add(
		SettingDefinition::builder("forumheading")
			.description(texts.text("forumsettingsdesc"))
			.kind(SettingKind::Heading)
			.build()?,
	);

	// Enable custom template.
	page.add(
		SettingDefinition::builder("forumcustomtemplate")
			.label(texts.text("forumcustomtemplate"))
			.description(texts.text("forumcustomtemplatedesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	// Header setting.
	page.add(
		SettingDefinition::builder("forumhtmlemailheader")
			.label(texts.text("forumhtmlemailheader"))
			.description(texts.text("forumhtmlemailheaderdesc"))
			.kind(SettingKind::RichText)
			.default(SettingValue::Str(String::new()))
			.build()?,
	);

	// Footer setting.
	page.add(
		SettingDefinition::builder("forumhtmlemailfooter")
			.label(texts.text("forumhtmlemailfooter"))
			.description(texts.text("forumhtmlemailfooterdesc"))
			.kind(SettingKind::RichText)
			.default(SettingValue::Str(String::new()))
			.build()?,
	);

	Ok(page)
}

// vim: ts=4
