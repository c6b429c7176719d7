use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{FinishArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tabpick` binary.
///
/// Picker settings can also come from config files and `TABPICK__*`
/// variables; the session script (`--query`, `--tab`, `--select`, finish
/// action) only comes from the command line.
#[derive(Parser, Debug)]
#[command(
	name = "tabpick",
	version,
	long_version = long_version(),
	about = "Drive a tabbed item picker over a JSON catalog",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "TABPICK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long,
		value_name = "FILE",
		help = "JSON catalog of tabs, items and recents (default: catalog.path setting)"
	)]
	pub(crate) catalog: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the dialog title (default: Choose an item)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "search",
		value_parser = BoolishValueParser::new(),
		help = "Show the search box (default: enabled)"
	)]
	pub(crate) show_search: Option<bool>,
	#[arg(
		long = "confirm-buttons",
		value_parser = BoolishValueParser::new(),
		help = "Require an explicit confirm step (default: enabled)"
	)]
	pub(crate) has_confirm_buttons: Option<bool>,
	#[arg(
		long = "recents",
		value_parser = BoolishValueParser::new(),
		help = "Offer the Recents tab (default: enabled)"
	)]
	pub(crate) has_recents: Option<bool>,
	#[arg(
		long = "default-to-recents",
		value_parser = BoolishValueParser::new(),
		help = "Open on the Recents tab when it exists (default: enabled)"
	)]
	pub(crate) default_to_recent_tab: Option<bool>,
	#[arg(
		long = "confirm-label",
		value_name = "TEXT",
		help = "Label of the confirm button (default: Select)"
	)]
	pub(crate) confirm_label: Option<String>,
	#[arg(
		long = "cancel-label",
		value_name = "TEXT",
		help = "Label of the cancel button (default: Cancel)"
	)]
	pub(crate) cancel_label: Option<String>,
	#[arg(
		long = "search-models",
		value_delimiter = ',',
		value_name = "MODEL",
		help = "Narrow searches to these tab models (default: every tab)"
	)]
	pub(crate) search_models: Option<Vec<String>>,
	#[arg(
		long = "limit",
		value_name = "NUM",
		help = "Cap the number of search results (default: 50)"
	)]
	pub(crate) search_limit: Option<usize>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "How long to wait for pending fetches (default: 5000)"
	)]
	pub(crate) wait_timeout_ms: Option<u64>,
	#[arg(
		long,
		value_name = "MODEL:ID",
		help = "Value the picker was opened with; its model picks the first tab (default: none)"
	)]
	pub(crate) initial: Option<String>,
	#[arg(
		short = 'q',
		long,
		value_name = "QUERY",
		help = "Type this query after opening (default: none)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "MODEL",
		help = "Activate this tab after opening (default: none)"
	)]
	pub(crate) tab: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "MODEL:ID",
		help = "Select this catalog item (default: none)"
	)]
	pub(crate) select: Option<String>,
	#[arg(
		long,
		value_enum,
		default_value_t = FinishArg::Confirm,
		help = "How to end the session"
	)]
	pub(crate) finish: FinishArg,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'v',
		long,
		help = "Log debug output to stderr (default: disabled)"
	)]
	pub(crate) verbose: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}
