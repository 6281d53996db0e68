#![allow(
	missing_copy_implementations,
	reason = "configs won't be copied around"
)]

use std::{fs, path::Path};

use color_eyre::{
	Section,
	eyre::{self, WrapErr},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Config
{
	pub(crate) output: OutputConfig,
	pub(crate) tracing: TracingConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct OutputConfig
{
	pub(crate) format: OutputFormat,

	/// Write the public universe as `1` instead of `0` in Steam2IDs.
	pub(crate) new_universe_numbering: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum OutputFormat
{
	#[default]
	Text,
	Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct TracingConfig
{
	pub(crate) ansi: bool,

	/// [`EnvFilter`] directives; `RUST_LOG` is used if this is not set.
	///
	/// [`EnvFilter`]: tracing_subscriber::EnvFilter
	pub(crate) filter: Option<String>,
}

impl Config
{
	pub(crate) fn load_from_file(path: &Path) -> eyre::Result<Self>
	{
		let file = fs::read_to_string(path)
			.wrap_err_with(|| format!("failed to read configuration file at {path:?}"))
			.suggestion("create the file or run without `--config`")?;

		Self::from_toml(&file)
	}

	fn from_toml(source: &str) -> eyre::Result<Self>
	{
		toml::from_str(source).wrap_err("failed to parse configuration file")
	}
}
