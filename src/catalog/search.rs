use std::sync::Arc;

use frizbee::{Config, match_list};
use tabpick_api::{FetchError, SearchProvider, SearchRequest};

use super::CatalogItem;

/// Datasets at least this large enable frizbee's prefilter.
const PREFILTER_ENABLE_THRESHOLD: usize = 1_000;

/// Result cap used when the request carries no `limit`.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// Fuzzy matcher over item names, scoped to the request's models.
#[derive(Debug, Clone)]
pub struct CatalogSearch {
	items: Arc<[CatalogItem]>,
}

impl CatalogSearch {
	pub fn new(items: Arc<[CatalogItem]>) -> Self {
		Self { items }
	}
}

fn config_for_query(query: &str, dataset_len: usize) -> Config {
	let mut config = Config {
		prefilter: false,
		..Config::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		config.prefilter = true;
		config.max_typos = Some(allowed_typos);
	} else {
		config.max_typos = None;
	}
	config.sort = false;

	config
}

impl SearchProvider<CatalogItem> for CatalogSearch {
	fn search(&self, request: &SearchRequest) -> Result<Vec<CatalogItem>, FetchError> {
		let scoped: Vec<&CatalogItem> = self
			.items
			.iter()
			.filter(|item| request.allows(&item.model))
			.collect();
		let limit = request.params.limit.unwrap_or(DEFAULT_RESULT_LIMIT);

		let needle = request.query.trim();
		if needle.is_empty() {
			let mut items: Vec<CatalogItem> = scoped.into_iter().cloned().collect();
			items.sort_by(|a, b| a.name.cmp(&b.name));
			items.truncate(limit);
			return Ok(items);
		}

		let haystacks: Vec<&str> = scoped.iter().map(|item| item.name.as_str()).collect();
		let config = config_for_query(needle, haystacks.len());
		let mut matches = match_list(needle, &haystacks, &config);
		matches.retain(|entry| entry.score > 0);
		matches.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index)));

		let results: Vec<CatalogItem> = matches
			.into_iter()
			.filter_map(|entry| scoped.get(entry.index as usize).map(|item| (*item).clone()))
			.take(limit)
			.collect();
		tracing::trace!(
			seq = request.seq,
			query = needle,
			count = results.len(),
			"catalog search finished"
		);
		Ok(results)
	}
}

#[cfg(test)]
mod tests {
	use tabpick_api::{Model, SearchParams};

	use super::*;

	fn search() -> CatalogSearch {
		CatalogSearch::new(
			vec![
				CatalogItem::new(1, "table", "Orders"),
				CatalogItem::new(2, "table", "People"),
				CatalogItem::new(3, "card", "Orders by month"),
				CatalogItem::new(4, "table", "Products"),
			]
			.into(),
		)
	}

	fn request(query: &str, models: &[&str]) -> SearchRequest {
		SearchRequest {
			seq: 1,
			query: query.to_string(),
			models: models.iter().map(|model| Model::new(*model)).collect(),
			params: SearchParams::default(),
		}
	}

	#[test]
	fn results_stay_within_requested_models() {
		let results = search().search(&request("Orders", &["table"])).expect("search");
		assert!(!results.is_empty());
		assert!(results.iter().all(|item| item.model == "table"));
		assert_eq!(results[0].name, "Orders");
	}

	#[test]
	fn best_match_comes_first() {
		let results = search()
			.search(&request("People", &["table", "card"]))
			.expect("search");
		assert_eq!(results[0].name, "People");
	}

	#[test]
	fn limit_caps_the_result_count() {
		let mut request = request("o", &["table", "card"]);
		request.params.limit = Some(1);
		let results = search().search(&request).expect("search");
		assert_eq!(results.len(), 1);
	}

	#[test]
	fn blank_query_lists_scope_alphabetically() {
		let results = search().search(&request("  ", &["table"])).expect("search");
		let names: Vec<&str> = results.iter().map(|item| item.name.as_str()).collect();
		assert_eq!(names, vec!["Orders", "People", "Products"]);
	}

	#[test]
	fn short_queries_allow_no_typos() {
		assert_eq!(config_for_query("a", 10).max_typos, None);
		assert_eq!(config_for_query("a", 5_000).max_typos, Some(0));
		assert_eq!(config_for_query("orders", 5_000).max_typos, Some(2));
	}
}
