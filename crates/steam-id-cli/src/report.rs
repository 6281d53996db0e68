use std::io::{self, Write};

use serde::Serialize;
use steam_id::SteamId;

use crate::config::OutputFormat;

/// Everything we know about a single SteamID.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a>
{
	input: &'a str,
	steam_id64: &'a SteamId,

	#[serde(skip_serializing_if = "Option::is_none")]
	steam2: Option<String>,
	steam3: String,
	universe: u8,
	account_type: String,
	instance: u32,
	account_number: u32,

	#[serde(skip_serializing_if = "Option::is_none")]
	token: Option<&'a str>,
	valid: bool,
	valid_individual: bool,
	group_chat: bool,
	lobby: bool,
}

impl<'a> Report<'a>
{
	pub(crate) fn new(input: &'a str, steam_id: &'a SteamId, new_universe_numbering: bool) -> Self
	{
		let steam2 = steam_id.render_steam2(new_universe_numbering);

		Self {
			input,
			steam_id64: steam_id,
			steam2: (!steam2.is_empty()).then_some(steam2),
			steam3: steam_id.render_steam3(),
			universe: steam_id.account_universe().raw(),
			account_type: steam_id.account_type().to_string(),
			instance: steam_id.account_instance().raw(),
			account_number: steam_id.account_number().raw(),
			token: steam_id.token(),
			valid: steam_id.is_valid(),
			valid_individual: steam_id.is_valid_individual(),
			group_chat: steam_id.is_group_chat(),
			lobby: steam_id.is_lobby(),
		}
	}

	pub(crate) fn write_to(&self, mut writer: impl Write, format: OutputFormat) -> io::Result<()>
	{
		match format {
			OutputFormat::Json => {
				serde_json::to_writer(&mut writer, self)?;
				writeln!(writer)
			}
			OutputFormat::Text => self.write_text(writer),
		}
	}

	fn write_text(&self, mut writer: impl Write) -> io::Result<()>
	{
		writeln!(writer, "{}", self.input)?;
		writeln!(writer, "  steamid64:        {}", self.steam_id64)?;

		if let Some(steam2) = &self.steam2 {
			writeln!(writer, "  steam2:           {steam2}")?;
		}

		writeln!(writer, "  steam3:           {}", self.steam3)?;
		writeln!(writer, "  universe:         {}", self.universe)?;
		writeln!(writer, "  type:             {}", self.account_type)?;
		writeln!(writer, "  instance:         {}", self.instance)?;
		writeln!(writer, "  account number:   {}", self.account_number)?;

		if let Some(token) = self.token {
			writeln!(writer, "  token:            {token}")?;
		}

		writeln!(writer, "  valid:            {}", self.valid)?;
		writeln!(writer, "  valid individual: {}", self.valid_individual)?;
		writeln!(writer, "  group chat:       {}", self.group_chat)?;
		writeln!(writer, "  lobby:            {}", self.lobby)
	}
}
