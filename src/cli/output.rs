use anyhow::Result;
use serde_json::json;
use tabpick::PickerOutcome;
use tabpick::catalog::CatalogItem;

/// Print a plain-text representation of the picker outcome.
pub(crate) fn print_plain(outcome: &PickerOutcome<CatalogItem>) {
	println!("{}", format_outcome_plain(outcome));
}

pub(crate) fn format_outcome_plain(outcome: &PickerOutcome<CatalogItem>) -> String {
	match outcome.selected() {
		Some(item) => format!("{}:{}\t{}", item.model, item.id, item.name),
		None if outcome.query.is_empty() => {
			format!("No item chosen (tab: {})", outcome.active_tab)
		}
		None => format!(
			"No item chosen (query: '{}', tab: {})",
			outcome.query, outcome.active_tab
		),
	}
}

/// Format the picker outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &PickerOutcome<CatalogItem>) -> Result<String> {
	let selection = match outcome.selected() {
		Some(item) => serde_json::to_value(item)?,
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"active_tab": outcome.active_tab,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the picker outcome.
pub(crate) fn print_json(outcome: &PickerOutcome<CatalogItem>) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
