use std::{fmt, str::FromStr};

/// Steam account universes
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Universes_Available_for_Steam_Accounts>
///
/// The universe occupies the top 8 bits of a SteamID64. Values without a name are kept around as
/// [`AccountUniverse::Unknown`] so that decoding and re-encoding never loses information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountUniverse
{
	Invalid,
	Public,
	Beta,
	Internal,
	Dev,

	/// Any value without a known name.
	///
	/// Only [`AccountUniverse::from_raw()`] and [`AccountUniverse::from_bits()`] produce this
	/// variant, so the value is always 5 or greater.
	///
	/// ```compile_fail
	/// let universe = steam_id::AccountUniverse::Unknown(1);
	/// ```
	#[non_exhaustive]
	Unknown(u8),
}

/// Error type for conversions from strings to [`AccountUniverse`]
#[allow(missing_copy_implementations)]
#[derive(Debug, Display, Error)]
#[display("invalid account universe")]
pub struct InvalidAccountUniverse(#[error(ignore)] ());

impl AccountUniverse
{
	/// Extracts the universe bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self::from_raw((bits >> 56) as u8)
	}

	/// Creates an [`AccountUniverse`] from its 8-bit value.
	pub const fn from_raw(value: u8) -> Self
	{
		match value {
			0 => Self::Invalid,
			1 => Self::Public,
			2 => Self::Beta,
			3 => Self::Internal,
			4 => Self::Dev,
			other => Self::Unknown(other),
		}
	}

	/// Returns the 8-bit value.
	pub const fn raw(self) -> u8
	{
		match self {
			Self::Invalid => 0,
			Self::Public => 1,
			Self::Beta => 2,
			Self::Internal => 3,
			Self::Dev => 4,
			Self::Unknown(other) => other,
		}
	}

	/// Returns whether this is one of the four real universes.
	pub const fn is_known(self) -> bool
	{
		matches!(self, Self::Public | Self::Beta | Self::Internal | Self::Dev)
	}
}

impl fmt::Display for AccountUniverse
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.raw(), fmt)
	}
}

impl FromStr for AccountUniverse
{
	type Err = InvalidAccountUniverse;

	fn from_str(value: &str) -> Result<Self, Self::Err>
	{
		match value {
			"invalid" | "Invalid" => Ok(Self::Invalid),
			"public" | "Public" => Ok(Self::Public),
			"beta" | "Beta" => Ok(Self::Beta),
			"internal" | "Internal" => Ok(Self::Internal),
			"dev" | "Dev" => Ok(Self::Dev),
			_ => value
				.parse::<u8>()
				.map(Self::from_raw)
				.map_err(|_| InvalidAccountUniverse(())),
		}
	}
}
