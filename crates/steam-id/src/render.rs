use std::fmt;

use crate::{AccountInstance, AccountType, AccountUniverse, SteamId};

/// Displays a [`SteamId`] as a Steam2ID (`STEAM_X:Y:Z`).
///
/// Only individual accounts have a Steam2ID; anything else displays as an empty string.
///
/// Historically the public universe is written as `0`. Use
/// [`SteamId::steam2_with_new_universe_numbering()`] to write it as `1` instead.
#[derive(Debug, Clone, Copy)]
pub struct Steam2Id<'a>
{
	steam_id: &'a SteamId,
	new_universe_numbering: bool,
}

/// Displays a [`SteamId`] as a Steam3ID (`[U:1:474816273]`).
#[derive(Debug, Clone, Copy)]
pub struct Steam3Id<'a>
{
	steam_id: &'a SteamId,
}

impl SteamId
{
	/// Returns a [`Display`] implementation writing this SteamID in the Steam2ID format.
	///
	/// [`Display`]: fmt::Display
	pub const fn steam2(&self) -> Steam2Id<'_>
	{
		Steam2Id { steam_id: self, new_universe_numbering: false }
	}

	/// Like [`SteamId::steam2()`], but writes the public universe as `1`.
	pub const fn steam2_with_new_universe_numbering(&self) -> Steam2Id<'_>
	{
		Steam2Id { steam_id: self, new_universe_numbering: true }
	}

	/// Returns a [`Display`] implementation writing this SteamID in the Steam3ID format.
	///
	/// [`Display`]: fmt::Display
	pub const fn steam3(&self) -> Steam3Id<'_>
	{
		Steam3Id { steam_id: self }
	}

	/// Renders this SteamID as a Steam2ID.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// let steam_id = "76561198435082001".parse::<SteamId>().unwrap();
	///
	/// assert_eq!(steam_id.render_steam2(false), "STEAM_0:1:237408136");
	/// assert_eq!(steam_id.render_steam2(true), "STEAM_1:1:237408136");
	/// ```
	pub fn render_steam2(&self, new_universe_numbering: bool) -> String
	{
		Steam2Id { steam_id: self, new_universe_numbering }.to_string()
	}

	/// Renders this SteamID as a Steam3ID.
	pub fn render_steam3(&self) -> String
	{
		self.steam3().to_string()
	}
}

impl fmt::Display for Steam2Id<'_>
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let steam_id = self.steam_id;

		if steam_id.account_type() != AccountType::Individual {
			return Ok(());
		}

		let universe = match steam_id.account_universe() {
			AccountUniverse::Public if !self.new_universe_numbering => 0,
			universe => universe.raw(),
		};

		write!(
			fmt,
			"STEAM_{universe}:{}:{}",
			steam_id.account_number().y(),
			steam_id.account_number().z(),
		)
	}
}

impl fmt::Display for Steam3Id<'_>
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		let steam_id = self.steam_id;
		let account_type = steam_id.account_type();
		let instance = steam_id.account_instance();

		let code = if instance.contains(AccountInstance::CHAT_CLAN) {
			'c'
		} else if instance.contains(AccountInstance::CHAT_LOBBY) {
			'L'
		} else {
			account_type.code()
		};

		write!(fmt, "[{code}:{}:{}", steam_id.account_universe(), steam_id.account_number())?;

		let render_instance = match account_type {
			AccountType::AnonGameServer | AccountType::Multiseat => true,
			AccountType::Individual => instance != AccountInstance::DESKTOP,
			_ => false,
		};

		if render_instance {
			write!(fmt, ":{instance}")?;
		}

		fmt.write_str("]")
	}
}
