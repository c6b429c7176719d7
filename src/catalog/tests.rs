use std::io::Write;

use tabpick_api::{ItemKey, RecentsContext, RecentsProvider};
use tempfile::NamedTempFile;

use super::*;

const CATALOG: &str = r#"{
	"tabs": [
		{ "model": "card", "display_name": "Questions", "icon": "card" },
		{ "model": "table", "display_name": "Tables" }
	],
	"items": [
		{ "id": 1, "model": "card", "name": "Revenue" },
		{ "id": 2, "model": "table", "name": "Orders", "description": "All orders" },
		{ "id": "people", "model": "table", "name": "People" }
	],
	"recents": [
		{ "id": 2, "model": "table", "name": "Orders", "timestamp": "2024-05-01T10:00:00Z" },
		{ "id": 1, "model": "card", "name": "Revenue", "timestamp": "2024-05-02T10:00:00Z" }
	],
	"unselectable": ["table:people"]
}"#;

#[test]
fn tabs_browse_their_own_items() {
	let catalog = Catalog::from_json(CATALOG).expect("catalog");
	let tabs = catalog.tabs();

	assert_eq!(tabs.len(), 2);
	assert_eq!(tabs[0].icon, "card");
	assert_eq!(tabs[1].icon, "");
	assert_eq!(tabs[1].content.len(), 2);
	assert!(tabs[1].content.iter().all(|item| item.model == "table"));
}

#[test]
fn unselectable_keys_are_refused() {
	let catalog = Catalog::from_json(CATALOG).expect("catalog");
	let selectable = catalog.selectable();

	let people = catalog
		.find(&ItemKey::new("people", "table"))
		.expect("people");
	let orders = catalog.find(&ItemKey::new(2, "table")).expect("orders");
	assert!(!selectable(people));
	assert!(selectable(orders));
}

#[test]
fn recents_are_served_newest_first() {
	let catalog = Catalog::from_json(CATALOG).expect("catalog");
	let recents = catalog
		.recents_provider()
		.fetch_recents(&RecentsContext::default())
		.expect("recents");

	let names: Vec<&str> = recents.iter().map(|recent| recent.item.name.as_str()).collect();
	assert_eq!(names, vec!["Revenue", "Orders"]);
}

#[test]
fn load_reads_catalog_files() {
	let mut file = NamedTempFile::new().expect("temp file");
	file.write_all(CATALOG.as_bytes()).expect("write catalog");

	let catalog = Catalog::load(file.path()).expect("catalog");
	assert_eq!(catalog.items().len(), 3);
	assert_eq!(
		catalog.items()[1].description.as_deref(),
		Some("All orders")
	);
}

#[test]
fn missing_files_and_bad_json_are_reported() {
	let dir = tempfile::tempdir().expect("temp dir");
	let missing = Catalog::load(&dir.path().join("missing.json"));
	assert!(matches!(missing, Err(CatalogError::Read { .. })));

	let broken = Catalog::from_json("{ \"tabs\": 3 }");
	assert!(matches!(broken, Err(CatalogError::Parse { .. })));
}

#[test]
fn catalogs_without_tabs_are_rejected() {
	assert!(matches!(
		Catalog::from_json("{}"),
		Err(CatalogError::NoTabs)
	));
}

#[test]
fn keys_parse_numeric_and_string_ids() {
	assert_eq!(parse_key("table:2").expect("key"), ItemKey::new(2, "table"));
	assert_eq!(
		parse_key("table:people").expect("key"),
		ItemKey::new("people", "table")
	);
	assert!(matches!(parse_key("table"), Err(CatalogError::InvalidKey(_))));
	assert!(matches!(parse_key(":2"), Err(CatalogError::InvalidKey(_))));
}
