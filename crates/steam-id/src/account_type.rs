use std::{fmt, str::FromStr};

/// Different types of Steam accounts
///
/// The account type occupies 4 bits of a SteamID64. Values 11 through 15 have no name and are
/// carried as [`AccountType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountType
{
	Invalid,
	Individual,
	Multiseat,
	GameServer,
	AnonGameServer,
	Pending,
	ContentServer,
	Clan,
	Chat,
	P2PSuperSeeder,
	AnonUser,

	/// Any 4-bit value without a known name.
	///
	/// Only [`AccountType::from_raw()`] and [`AccountType::from_bits()`] produce this variant, so
	/// the value is always in `11..=15`.
	///
	/// ```compile_fail
	/// let account_type = steam_id::AccountType::Unknown(1);
	/// ```
	#[non_exhaustive]
	Unknown(u8),
}

/// Error type for conversions from strings to [`AccountType`]
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("invalid account type")]
pub struct InvalidAccountType(#[error(ignore)] ());

/// Letter used by [`AccountType::code()`] for types without a letter of their own.
pub const UNKNOWN_CODE: char = 'i';

/// The fixed mapping between account types and the single letters used in Steam3IDs.
const CODES: [(AccountType, char); 9] = [
	(AccountType::Individual, 'U'),
	(AccountType::Multiseat, 'M'),
	(AccountType::GameServer, 'G'),
	(AccountType::AnonGameServer, 'A'),
	(AccountType::Pending, 'P'),
	(AccountType::ContentServer, 'C'),
	(AccountType::Clan, 'g'),
	(AccountType::Chat, 'T'),
	(AccountType::AnonUser, 'a'),
];

impl AccountType
{
	/// Extracts the account type bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self::from_raw(((bits >> 52) & 0xF) as u8)
	}

	/// Creates an [`AccountType`] from its raw value.
	///
	/// Only the low 4 bits of `value` are considered.
	pub const fn from_raw(value: u8) -> Self
	{
		match value & 0xF {
			0 => Self::Invalid,
			1 => Self::Individual,
			2 => Self::Multiseat,
			3 => Self::GameServer,
			4 => Self::AnonGameServer,
			5 => Self::Pending,
			6 => Self::ContentServer,
			7 => Self::Clan,
			8 => Self::Chat,
			9 => Self::P2PSuperSeeder,
			10 => Self::AnonUser,
			other => Self::Unknown(other),
		}
	}

	/// Returns the raw 4-bit value.
	pub const fn raw(self) -> u8
	{
		match self {
			Self::Invalid => 0,
			Self::Individual => 1,
			Self::Multiseat => 2,
			Self::GameServer => 3,
			Self::AnonGameServer => 4,
			Self::Pending => 5,
			Self::ContentServer => 6,
			Self::Clan => 7,
			Self::Chat => 8,
			Self::P2PSuperSeeder => 9,
			Self::AnonUser => 10,
			Self::Unknown(other) => other & 0xF,
		}
	}

	/// Returns whether this is one of the named types other than [`Invalid`].
	///
	/// [`Invalid`]: AccountType::Invalid
	pub const fn is_known(self) -> bool
	{
		!matches!(self, Self::Invalid | Self::Unknown(_))
	}

	/// Returns the letter representing this type in a Steam3ID.
	///
	/// Types without a letter (including [`Invalid`]) are represented by [`UNKNOWN_CODE`].
	///
	/// [`Invalid`]: AccountType::Invalid
	pub fn code(self) -> char
	{
		CODES
			.iter()
			.find(|&&(account_type, _)| account_type == self)
			.map_or(UNKNOWN_CODE, |&(_, code)| code)
	}

	/// Looks up the type represented by `code` in a Steam3ID.
	///
	/// Letters without a type map to [`Invalid`].
	///
	/// [`Invalid`]: AccountType::Invalid
	pub fn from_code(code: char) -> Self
	{
		CODES
			.iter()
			.find(|&&(_, candidate)| candidate == code)
			.map_or(Self::Invalid, |&(account_type, _)| account_type)
	}
}

impl fmt::Display for AccountType
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		match self {
			Self::Invalid => fmt.write_str("Invalid"),
			Self::Individual => fmt.write_str("Individual"),
			Self::Multiseat => fmt.write_str("Multiseat"),
			Self::GameServer => fmt.write_str("GameServer"),
			Self::AnonGameServer => fmt.write_str("AnonGameServer"),
			Self::Pending => fmt.write_str("Pending"),
			Self::ContentServer => fmt.write_str("ContentServer"),
			Self::Clan => fmt.write_str("Clan"),
			Self::Chat => fmt.write_str("Chat"),
			Self::P2PSuperSeeder => fmt.write_str("P2PSuperSeeder"),
			Self::AnonUser => fmt.write_str("AnonUser"),
			Self::Unknown(other) => write!(fmt, "Unknown({other})"),
		}
	}
}

impl FromStr for AccountType
{
	type Err = InvalidAccountType;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"invalid" | "Invalid" => Ok(Self::Invalid),
			"individual" | "Individual" => Ok(Self::Individual),
			"multiseat" | "Multiseat" => Ok(Self::Multiseat),
			"gameserver" | "GameServer" => Ok(Self::GameServer),
			"anongameserver" | "AnonGameServer" => Ok(Self::AnonGameServer),
			"pending" | "Pending" => Ok(Self::Pending),
			"contentserver" | "ContentServer" => Ok(Self::ContentServer),
			"clan" | "Clan" => Ok(Self::Clan),
			"chat" | "Chat" => Ok(Self::Chat),
			"p2psuperseeder" | "P2PSuperSeeder" => Ok(Self::P2PSuperSeeder),
			"anonuser" | "AnonUser" => Ok(Self::AnonUser),
			_ => Err(InvalidAccountType(())),
		}
	}
}
