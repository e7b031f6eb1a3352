//! Frontpage settings tab
//!
//! Banner, marketing boxes, and the three repeat-driven blocks (slider,
//! sponsors, clients). Each repeat block is expanded from a count stored on
//! a previous save, so resizing one only shows up after the page is built
//! again.

use lumo_core::settings::{
	Choices, FileConstraints, Page, SettingDefinition, SettingKind, SettingValue,
};
use lumo_types::config_adapter::ConfigAdapter;
use lumo_types::texts::Texts;

use crate::builder::expand_repeat_group;
use crate::pages::WEB_IMAGE_TYPES;
use crate::prelude::*;

/// Default heading / subheading / content of the four marketing boxes
const MARKETING_DEFAULTS: [(&str, &str, &str); 4] = [
	("We host", "your campus", "Hosting in a powerful cloud infrastructure"),
	("Consulting", "for your company", "Training and consulting for your organization"),
	("Development", "themes and plugins", "We develop themes and plugins as you desire"),
	("Support", "we give you answers", "Specialized support for your platform"),
];

pub async fn build(config: &dyn ConfigAdapter, texts: &dyn Texts) -> LmResult<Page> {
	let mut page = Page::new("theme_lumo_frontpage", texts.text("frontpagesettings"));

	// Header image file setting.
	page.add(
		SettingDefinition::builder("headerimg")
			.label(texts.text("headerimg"))
			.description(texts.text("headerimgdesc"))
			.kind(SettingKind::StoredFile {
				area: "headerimg".into(),
				constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
			})
			.updates_render_cache()
			.build()?,
	);

	// Banner heading.
	page.add(
		SettingDefinition::builder("bannerheading")
			.label(texts.text("bannerheading"))
			.description(texts.text("bannerheadingdesc"))
			.default(SettingValue::Str("Perfect Learning System".into()))
			.updates_render_cache()
			.build()?,
	);

	// Banner content.
	page.add(
		SettingDefinition::builder("bannercontent")
			.label(texts.text("bannercontent"))
			.description(texts.text("bannercontentdesc"))
			.kind(SettingKind::TextArea)
			.default(SettingValue::Str(
				"Lorem Ipsum is simply dummy text of the printing and typesetting industry.".into(),
			))
			.updates_render_cache()
			.build()?,
	);

	let mut yes_no = Choices::new();
	yes_no.insert(SettingValue::Int(0), "No");
	yes_no.insert(SettingValue::Int(1), "Yes");
	page.add(
		SettingDefinition::builder("displaymarketingbox")
			.label(texts.text("displaymarketingbox"))
			.description(texts.text("displaymarketingboxdesc"))
			.kind(SettingKind::Select { choices: yes_no })
			.default(SettingValue::Int(1))
			.build()?,
	);

	// The four marketing boxes: icon, heading, subheading, content, url.
	for (i, (heading, subheading, content)) in MARKETING_DEFAULTS.iter().enumerate() {
		let n = i + 1;

		page.add(
			SettingDefinition::builder(format!("marketing{n}icon"))
				.label(texts.text("marketingicon"))
				.description(texts.text("marketingicondesc"))
				.kind(SettingKind::StoredFile {
					area: format!("marketing{n}icon").into(),
					constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
				})
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("marketing{n}heading"))
				.label(texts.text("marketingheading"))
				.description(texts.text("marketingheadingdesc"))
				.default(SettingValue::Str((*heading).into()))
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("marketing{n}subheading"))
				.label(texts.text("marketingsubheading"))
				.description(texts.text("marketingsubheadingdesc"))
				.default(SettingValue::Str((*subheading).into()))
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("marketing{n}content"))
				.label(texts.text("marketingcontent"))
				.description(texts.text("marketingcontentdesc"))
				.kind(SettingKind::TextArea)
				.default(SettingValue::Str((*content).into()))
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("marketing{n}url"))
				.label(texts.text("marketingurl"))
				.description(texts.text("marketingurldesc"))
				.default(SettingValue::Str(String::new()))
				.updates_render_cache()
				.build()?,
		);
	}

	// Slideshow.
	page.add(
		SettingDefinition::builder("sliderenabled")
			.label(texts.text("sliderenabled"))
			.description(texts.text("sliderenableddesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("sliderfrontpage")
			.label(texts.text("sliderfrontpage"))
			.description(texts.text("sliderfrontpagedesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("slidercount")
			.label(texts.text("slidercount"))
			.description(texts.text("slidercountdesc"))
			.kind(SettingKind::Select { choices: Choices::int_range(0..=12) })
			.default(SettingValue::Int(1))
			.updates_render_cache()
			.build()?,
	);

	// Without a stored count yet, expand a single slide.
	expand_repeat_group(config, "slidercount", 1, &mut page, |page, i| {
		page.add(
			SettingDefinition::builder(format!("sliderimage{i}"))
				.label(texts.text("sliderimage"))
				.description(texts.text("sliderimagedesc"))
				.kind(SettingKind::StoredFile {
					area: format!("sliderimage{i}").into(),
					constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
				})
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("slidertitle{i}"))
				.label(texts.text("slidertitle"))
				.description(texts.text("slidertitledesc"))
				.default(SettingValue::Str(String::new()))
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("slidercap{i}"))
				.label(texts.text("slidercaption"))
				.description(texts.text("slidercaptiondesc"))
				.kind(SettingKind::RichText)
				.default(SettingValue::Str(String::new()))
				.build()?,
		);

		Ok(())
	})
	.await?;

	page.add(
		SettingDefinition::builder("numbersfrontpage")
			.label(texts.text("numbersfrontpage"))
			.description(texts.text("numbersfrontpagedesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(true))
			.build()?,
	);

	// Sponsors.
	page.add(
		SettingDefinition::builder("sponsorsfrontpage")
			.label(texts.text("sponsorsfrontpage"))
			.description(texts.text("sponsorsfrontpagedesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("sponsorstitle")
			.label(texts.text("sponsorstitle"))
			.description(texts.text("sponsorstitledesc"))
			.default(SettingValue::Str(texts.text("sponsorstitledefault").into()))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("sponsorssubtitle")
			.label(texts.text("sponsorssubtitle"))
			.description(texts.text("sponsorssubtitledesc"))
			.default(SettingValue::Str(texts.text("sponsorssubtitledefault").into()))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("sponsorscount")
			.label(texts.text("sponsorscount"))
			.description(texts.text("sponsorscountdesc"))
			.kind(SettingKind::Select { choices: Choices::int_range(0..=4) })
			.default(SettingValue::Int(1))
			.updates_render_cache()
			.build()?,
	);

	expand_repeat_group(config, "sponsorscount", 1, &mut page, |page, i| {
		page.add(
			SettingDefinition::builder(format!("sponsorsimage{i}"))
				.label(texts.text("sponsorsimage"))
				.description(texts.text("sponsorsimagedesc"))
				.kind(SettingKind::StoredFile {
					area: format!("sponsorsimage{i}").into(),
					constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
				})
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("sponsorsurl{i}"))
				.label(texts.text("sponsorsurl"))
				.description(texts.text("sponsorsurldesc"))
				.default(SettingValue::Str(String::new()))
				.build()?,
		);

		Ok(())
	})
	.await?;

	// Clients.
	page.add(
		SettingDefinition::builder("clientsfrontpage")
			.label(texts.text("clientsfrontpage"))
			.description(texts.text("clientsfrontpagedesc"))
			.kind(SettingKind::Checkbox)
			.default(SettingValue::Bool(false))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("clientstitle")
			.label(texts.text("clientstitle"))
			.description(texts.text("clientstitledesc"))
			.default(SettingValue::Str(texts.text("clientstitledefault").into()))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("clientssubtitle")
			.label(texts.text("clientssubtitle"))
			.description(texts.text("clientssubtitledesc"))
			.default(SettingValue::Str(texts.text("clientssubtitledefault").into()))
			.build()?,
	);

	page.add(
		SettingDefinition::builder("clientscount")
			.label(texts.text("clientscount"))
			.description(texts.text("clientscountdesc"))
			.kind(SettingKind::Select { choices: Choices::int_range(0..=4) })
			.default(SettingValue::Int(1))
			.updates_render_cache()
			.build()?,
	);

	expand_repeat_group(config, "clientscount", 1, &mut page, |page, i| {
		page.add(
			SettingDefinition::builder(format!("clientsimage{i}"))
				.label(texts.text("clientsimage"))
				.description(texts.text("clientsimagedesc"))
				.kind(SettingKind::StoredFile {
					area: format!("clientsimage{i}").into(),
					constraints: FileConstraints::new(WEB_IMAGE_TYPES, 1),
				})
				.updates_render_cache()
				.build()?,
		);

		page.add(
			SettingDefinition::builder(format!("clientsurl{i}"))
				.label(texts.text("clientsurl"))
				.description(texts.text("clientsurldesc"))
				.default(SettingValue::Str(String::new()))
				.build()?,
		);

		Ok(())
	})
	.await?;

	Ok(page)
}

// vim: ts=4
