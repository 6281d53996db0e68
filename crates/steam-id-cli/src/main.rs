//! Command-line front end for the `steam-id` crate.
//! Copyright (C) 2024  AlphaKeks <alphakeks@dawn.sh>
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::{
	io::{self, Write},
	path::PathBuf,
	process::ExitCode,
};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{self, WrapErr};
use steam_id::SteamId;

use self::{
	config::{Config, OutputFormat},
	report::Report,
};

mod config;
mod logging;
mod report;

/// Parse, render and validate SteamIDs.
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
	/// Path to a TOML configuration file
	#[arg(long = "config", env = "STEAM_ID_CONFIG", global = true)]
	config_path: Option<PathBuf>,

	/// Output format; overrides the configuration file
	#[arg(long, value_enum, global = true)]
	format: Option<OutputFormat>,

	/// Write the public universe as `1` in Steam2IDs
	#[arg(long, global = true)]
	new_universe_numbering: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command
{
	/// Parse SteamID64s, Steam2IDs or Steam3IDs
	Parse
	{
		#[arg(required = true)]
		inputs: Vec<String>,
	},

	/// Extract the SteamID and token from a trade offer URL
	TradeUrl
	{
		url: String,
	},
}

fn main() -> eyre::Result<ExitCode>
{
	color_eyre::install()?;

	let args = Args::parse();
	let mut config = match args.config_path.as_deref() {
		Some(path) => Config::load_from_file(path)?,
		None => Config::default(),
	};

	if let Some(format) = args.format {
		config.output.format = format;
	}

	if args.new_universe_numbering {
		config.output.new_universe_numbering = true;
	}

	logging::init(&config.tracing)?;
	tracing::debug!(?config, "loaded configuration");

	let mut stdout = io::stdout().lock();

	match args.command {
		Command::Parse { inputs } => {
			let mut exit_code = ExitCode::SUCCESS;

			for input in &inputs {
				match SteamId::parse(input) {
					Ok(steam_id) => {
						Report::new(input, &steam_id, config.output.new_universe_numbering)
							.write_to(&mut stdout, config.output.format)
							.wrap_err("failed to write report")?;
					}
					Err(error) => {
						tracing::error!(%error, "skipping input");
						exit_code = ExitCode::FAILURE;
					}
				}
			}

			stdout.flush().wrap_err("failed to flush stdout")?;

			Ok(exit_code)
		}
		Command::TradeUrl { url } => {
			let steam_id = SteamId::from_trade_url(&url)?;

			Report::new(&url, &steam_id, config.output.new_universe_numbering)
				.write_to(&mut stdout, config.output.format)
				.wrap_err("failed to write report")?;

			Ok(ExitCode::SUCCESS)
		}
	}
}
