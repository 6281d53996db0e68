#![doc = include_str!("../README.md")]

#[macro_use(Display, From, Error)]
extern crate derive_more as _;

pub use self::{
	account_instance::AccountInstance,
	account_number::AccountNumber,
	account_type::{AccountType, InvalidAccountType, UNKNOWN_CODE},
	account_universe::{AccountUniverse, InvalidAccountUniverse},
	error::{InvalidTradeUrl, ParseSteamIdError},
	render::{Steam2Id, Steam3Id},
};
use std::{fmt, str::FromStr};

mod account_instance;
mod account_number;
mod account_type;
mod account_universe;
mod error;
mod parse;
mod render;
mod trade_url;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "rand")]
mod rand_impls;

/// A [SteamID]
///
/// Holds the four fields packed into a SteamID64, plus the token of the trade offer URL it was
/// created from, if any. Values are never modified after construction.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SteamId
{
	account_universe: AccountUniverse,
	account_type: AccountType,
	account_instance: AccountInstance,
	account_number: AccountNumber,
	token: Option<Box<str>>,
}

impl SteamId
{
	/// Parses any of the supported formats.
	///
	/// Tried in order:
	///    1. SteamID64 (`76561198435082001`)
	///    2. Steam2ID (`STEAM_0:1:237408136`)
	///    3. Steam3ID (`[U:1:474816273]`)
	///
	/// Parsing does not check whether the result [is valid](SteamId::is_valid).
	pub fn parse(input: &str) -> Result<Self, ParseSteamIdError>
	{
		parse::parse(input)
	}

	/// Decodes the 64-bit representation.
	///
	/// Every `u64` decodes to some [`SteamId`]; fields without a known meaning are preserved.
	pub const fn from_u64(bits: u64) -> Self
	{
		Self {
			account_universe: AccountUniverse::from_bits(bits),
			account_type: AccountType::from_bits(bits),
			account_instance: AccountInstance::from_bits(bits),
			account_number: AccountNumber::from_bits(bits),
			token: None,
		}
	}

	/// Creates a public, desktop, individual account with the given account number.
	pub const fn from_individual_account_number(account_number: u32) -> Self
	{
		Self {
			account_universe: AccountUniverse::Public,
			account_type: AccountType::Individual,
			account_instance: AccountInstance::DESKTOP,
			account_number: AccountNumber::new(account_number),
			token: None,
		}
	}

	/// Returns the 64-bit representation of this [`SteamId`].
	pub const fn as_u64(&self) -> u64
	{
		((self.account_universe.raw() as u64) << 56)
			| ((self.account_type.raw() as u64) << 52)
			| ((self.account_instance.raw() as u64) << 32)
			| (self.account_number.raw() as u64)
	}

	/// Returns the 64-bit representation as a decimal string.
	///
	/// This is the same as the [`Display`](fmt::Display) implementation.
	pub fn steam_id64(&self) -> String
	{
		self.to_string()
	}

	/// Returns the universe of the account this SteamID belongs to.
	pub const fn account_universe(&self) -> AccountUniverse
	{
		self.account_universe
	}

	/// Returns the type of account this SteamID belongs to.
	pub const fn account_type(&self) -> AccountType
	{
		self.account_type
	}

	/// Returns the account instance this SteamID belongs to.
	pub const fn account_instance(&self) -> AccountInstance
	{
		self.account_instance
	}

	/// Returns the account number of the account this SteamID belongs to.
	pub const fn account_number(&self) -> AccountNumber
	{
		self.account_number
	}

	/// Returns the trade offer token, if this SteamID was created from a trade offer URL.
	pub fn token(&self) -> Option<&str>
	{
		self.token.as_deref()
	}

	/// Returns whether Steam would consider this ID to be "valid".
	///
	/// This does not check whether the account exists, nor does it require an individual
	/// account or the public universe.
	pub const fn is_valid(&self) -> bool
	{
		if !self.account_type.is_known() || !self.account_universe.is_known() {
			return false;
		}

		let has_number = self.account_number.raw() != 0;

		match self.account_type {
			AccountType::Individual => {
				has_number && self.account_instance.raw() <= AccountInstance::WEB.raw()
			}
			AccountType::Clan => {
				has_number && self.account_instance.raw() == AccountInstance::ALL.raw()
			}
			AccountType::GameServer => has_number,
			_ => true,
		}
	}

	/// Returns whether this is a valid, public, desktop individual account.
	///
	/// This is what most people mean by "a SteamID".
	pub const fn is_valid_individual(&self) -> bool
	{
		matches!(self.account_universe, AccountUniverse::Public)
			&& matches!(self.account_type, AccountType::Individual)
			&& self.account_instance.raw() == AccountInstance::DESKTOP.raw()
			&& self.is_valid()
	}

	/// Returns whether this is a legacy group chat.
	pub const fn is_group_chat(&self) -> bool
	{
		matches!(self.account_type, AccountType::Chat)
			&& self.account_instance.contains(AccountInstance::CHAT_CLAN)
	}

	/// Returns whether this is a game lobby.
	pub const fn is_lobby(&self) -> bool
	{
		matches!(self.account_type, AccountType::Chat)
			&& (self.account_instance.contains(AccountInstance::CHAT_LOBBY)
				|| self.account_instance.contains(AccountInstance::CHAT_MMS_LOBBY))
	}
}

impl fmt::Display for SteamId
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.as_u64(), fmt)
	}
}

impl From<SteamId> for u64
{
	fn from(steam_id: SteamId) -> Self
	{
		steam_id.as_u64()
	}
}

impl From<&SteamId> for u64
{
	fn from(steam_id: &SteamId) -> Self
	{
		steam_id.as_u64()
	}
}

impl From<u64> for SteamId
{
	fn from(bits: u64) -> Self
	{
		Self::from_u64(bits)
	}
}

impl FromStr for SteamId
{
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		Self::parse(value)
	}
}

impl TryFrom<&str> for SteamId
{
	type Error = ParseSteamIdError;

	fn try_from(value: &str) -> Result<Self, Self::Error>
	{
		Self::parse(value)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	const PACKED: u64 = 76561198435082001_u64;

	fn parsed(input: &str) -> SteamId
	{
		let Ok(steam_id) = input.parse::<SteamId>() else {
			panic!("failed to parse `{input}`");
		};

		steam_id
	}

	#[test]
	fn from_u64_works()
	{
		let steam_id = SteamId::from_u64(PACKED);

		assert_eq!(steam_id.account_universe(), AccountUniverse::Public);
		assert_eq!(steam_id.account_type(), AccountType::Individual);
		assert_eq!(steam_id.account_instance(), AccountInstance::DESKTOP);
		assert_eq!(steam_id.account_number().raw(), 474816273_u32);
		assert_eq!(steam_id.as_u64(), PACKED);
	}

	#[test]
	fn from_individual_account_number_works()
	{
		assert_eq!(SteamId::from_individual_account_number(474816273).as_u64(), PACKED);
	}

	#[test]
	fn display_is_steam_id64()
	{
		assert_eq!(SteamId::from_u64(PACKED).to_string(), "76561198435082001");
		assert_eq!(SteamId::from_u64(PACKED).steam_id64(), "76561198435082001");
	}

	#[test]
	fn individual_validity()
	{
		assert!(SteamId::from_u64(PACKED).is_valid_individual());
		assert!(!SteamId::from_individual_account_number(0).is_valid());

		let web = SteamId::from_u64(PACKED & !(0xF_FFFF_u64 << 32) | (3_u64 << 32));
		assert!(web.is_valid());
		assert!(!web.is_valid_individual());

		let console_plus = SteamId::from_u64(PACKED & !(0xF_FFFF_u64 << 32) | (4_u64 << 32));
		assert!(!console_plus.is_valid());
	}

	#[test]
	fn universe_and_type_ranges()
	{
		let invalid_universe = SteamId::from_u64(PACKED & !(0xFF_u64 << 56));
		assert!(!invalid_universe.is_valid());

		let rc_universe = SteamId::from_u64(PACKED & !(0xFF_u64 << 56) | (5_u64 << 56));
		assert!(!rc_universe.is_valid());

		let invalid_type = SteamId::from_u64(PACKED & !(0xF_u64 << 52));
		assert!(!invalid_type.is_valid());

		let unknown_type = SteamId::from_u64(PACKED & !(0xF_u64 << 52) | (11_u64 << 52));
		assert!(!unknown_type.is_valid());
	}

	#[test]
	fn clan_validity()
	{
		assert!(parsed("[g:1:4]").is_valid());
		assert!(!parsed("[g:1:0]").is_valid());
		assert!(!parsed("[c:1:4]").is_valid());
	}

	#[test]
	fn game_server_validity()
	{
		assert!(parsed("[G:1:4]").is_valid());
		assert!(!parsed("[G:1:0]").is_valid());
		assert!(parsed("[A:1:0:5]").is_valid());
	}

	#[test]
	fn chat_classification()
	{
		let chat = |instance: AccountInstance| {
			SteamId::from_u64((1_u64 << 56) | (8_u64 << 52) | (u64::from(instance.raw()) << 32) | 7)
		};

		assert!(chat(AccountInstance::CHAT_CLAN).is_group_chat());
		assert!(!chat(AccountInstance::CHAT_CLAN).is_lobby());
		assert!(chat(AccountInstance::CHAT_LOBBY).is_lobby());
		assert!(chat(AccountInstance::CHAT_MMS_LOBBY).is_lobby());
		assert!(!chat(AccountInstance::ALL).is_lobby());
		assert!(!chat(AccountInstance::ALL).is_group_chat());
	}

	#[test]
	fn token_is_not_part_of_validity()
	{
		let Ok(steam_id) = SteamId::from_trade_url(
			"https://steamcommunity.com/tradeoffer/new/?partner=474816273&token=RZbHYcrV",
		) else {
			panic!("failed to parse trade url");
		};

		assert!(steam_id.is_valid_individual());
		assert_eq!(steam_id.as_u64(), PACKED);
	}
}
