use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let options = &config.options;
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Catalog: {}", config.catalog.display()),
		format!("  Title: {}", config.title),
		format!("  Search box: {}", bool_to_word(options.show_search)),
		format!(
			"  Confirm buttons: {}",
			bool_to_word(options.has_confirm_buttons)
		),
		format!("  Recents tab: {}", bool_to_word(options.has_recents)),
		format!(
			"  Default to recents: {}",
			bool_to_word(config.default_to_recent_tab)
		),
		format!(
			"  Labels: {} / {}",
			options.confirm_label(),
			options.cancel_label()
		),
	];

	match &config.search_params.models {
		Some(models) if !models.is_empty() => {
			let names: Vec<&str> = models.iter().map(|model| model.as_str()).collect();
			lines.push(format!("  Search models: {}", names.join(", ")));
		}
		_ => lines.push("  Search models: (every tab)".to_string()),
	}
	if let Some(limit) = config.search_params.limit {
		lines.push(format!("  Search limit: {limit}"));
	}
	lines.push(format!(
		"  Wait timeout: {}ms",
		config.wait_timeout.as_millis()
	));

	lines
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use tabpick::{Model, PickerOptions, SearchParams};

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_effective_values() {
		let config = ResolvedConfig {
			catalog: PathBuf::from("/tmp/items.json"),
			title: "Pick a table".into(),
			options: PickerOptions {
				has_recents: false,
				..PickerOptions::default()
			},
			default_to_recent_tab: true,
			search_params: SearchParams {
				models: Some(vec![Model::new("table")]),
				..SearchParams::default()
			},
			wait_timeout: Duration::from_millis(250),
		};

		let lines = summary_lines(&config);
		assert!(lines.contains(&"  Recents tab: no".to_string()));
		assert!(lines.contains(&"  Search models: table".to_string()));
		assert!(lines.contains(&"  Wait timeout: 250ms".to_string()));
		print_summary(&config);
	}
}
