//! Wiring and service behavior through the assembled admin surface

mod common;

use std::sync::Arc;

use common::TestHost;
use lumo::ThemeAdminBuilder;
use lumo::error::Error;
use lumo::settings::SettingValue;

#[tokio::test]
async fn build_requires_every_adapter() {
	let host = TestHost::new();

	let mut builder = ThemeAdminBuilder::new();
	let result = builder.config_adapter(host.config.clone()).build().await;
	assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[tokio::test]
async fn unconfigured_settings_resolve_to_their_defaults() {
	let host = TestHost::new();
	let admin = host.build().await;

	assert_eq!(
		admin.settings.get_str("bannerheading").await.unwrap(),
		"Perfect Learning System"
	);
	assert_eq!(admin.settings.get_str("preset").await.unwrap(), "default.scss");
	assert_eq!(admin.settings.get_int("slidercount").await.unwrap(), 1);
	assert!(admin.settings.get_bool("numbersfrontpage").await.unwrap());
	assert!(!admin.settings.get_bool("sliderenabled").await.unwrap());
}

#[tokio::test]
async fn set_round_trips_and_survives_a_rebuild() {
	let host = TestHost::new();
	let admin = host.build().await;

	admin.settings.set("brandcolor", SettingValue::Str("#7a5cfa".into())).await.unwrap();

	// the stored value persists independently of the declaration
	let rebuilt = host.build().await;
	assert_eq!(rebuilt.settings.get_str("brandcolor").await.unwrap(), "#7a5cfa");
}

#[tokio::test]
async fn set_rejects_values_outside_the_choice_list() {
	let host = TestHost::new();
	let admin = host.build().await;

	let result = admin.settings.set("preset", SettingValue::Str("missing.scss".into())).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));

	let result = admin.settings.set("slidercount", SettingValue::Int(13)).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn set_rejects_unknown_keys_and_type_mismatches() {
	let host = TestHost::new();
	let admin = host.build().await;

	let result = admin.settings.set("sliderimage7", SettingValue::Str("x".into())).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));

	let result = admin.settings.set("courselistview", SettingValue::Int(1)).await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn typed_getters_reject_mismatched_kinds() {
	let host = TestHost::new();
	let admin = host.build().await;

	let result = admin.settings.get_int("bannerheading").await;
	assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[tokio::test]
async fn delete_falls_back_to_the_default() {
	let host = TestHost::new();
	let admin = host.build().await;

	admin.settings.set("website", SettingValue::Str("https://example.org".into())).await.unwrap();
	admin.settings.delete("website").await.unwrap();

	assert_eq!(admin.settings.get_str("website").await.unwrap(), "https://lumotheme.org");
}

#[tokio::test]
async fn only_flagged_settings_fire_the_render_cache_hook() {
	let host = TestHost::new();
	let admin = host.build().await;

	// not flagged: structural toggles
	admin.settings.set("courselistview", SettingValue::Bool(true)).await.unwrap();
	admin.settings.set("displaymarketingbox", SettingValue::Int(0)).await.unwrap();
	admin.settings.set("sliderenabled", SettingValue::Bool(true)).await.unwrap();
	assert_eq!(host.invalidator.resets(), 0);

	// flagged: anything visual
	admin.settings.set("scss", SettingValue::Str(".navbar { color: red; }".into())).await.unwrap();
	assert_eq!(host.invalidator.resets(), 1);
}

#[tokio::test]
async fn uploads_go_through_constraint_checks() {
	let host = TestHost::new();
	let admin = host.build().await;

	// favicon accepts only .ico
	let result = admin.settings.store_upload("favicon", "favicon.png", b"png").await;
	assert!(matches!(result, Err(Error::ValidationError(_))));

	admin.settings.store_upload("favicon", "favicon.ico", b"ico").await.unwrap();
	assert_eq!(host.invalidator.resets(), 1);

	// uploaded preset shows up in the next build's choice list
	admin.settings.store_upload("presetfiles", "dark.scss", b"$body-bg: #111;").await.unwrap();
	let rebuilt = host.build().await;
	let def = rebuilt.tabs.get("preset").unwrap();
	match &def.kind {
		lumo::settings::SettingKind::Select { choices } => {
			assert!(choices.offers(&SettingValue::Str("dark.scss".into())));
		}
		kind => panic!("'preset' is not a select: {kind:?}"),
	}
}

#[tokio::test]
async fn texts_catalog_can_be_replaced() {
	#[derive(Debug)]
	struct Upper;

	impl lumo::texts::Texts for Upper {
		fn text(&self, id: &str) -> Box<str> {
			id.to_uppercase().into_boxed_str()
		}
	}

	let host = TestHost::new();
	let mut builder = host.builder();
	builder.texts(Arc::new(Upper));
	let admin = builder.build().await.unwrap().unwrap();

	let def = admin.tabs.get("logo").unwrap();
	assert_eq!(def.label.as_ref(), "LOGO");
	assert_eq!(def.description.as_ref(), "LOGODESC");
}
