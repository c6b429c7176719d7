use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

/// How a scripted session ends once its events have been replayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum FinishArg {
	/// Press the confirm button.
	Confirm,
	/// Press cancel (or escape).
	Cancel,
	/// Leave the picker open and report its state.
	Open,
}
