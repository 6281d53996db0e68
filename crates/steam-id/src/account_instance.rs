use std::{fmt, ops::BitOr};

/// Steam account instance bits
///
/// A 20-bit field. For individual accounts it names the client type; for chat accounts the upper
/// bits additionally carry the `CHAT_*` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountInstance(u32);

impl AccountInstance
{
	/// All bits an instance may use.
	pub const MASK: u32 = 0x000F_FFFF;

	pub const ALL: Self = Self(0);
	pub const DESKTOP: Self = Self(1);
	pub const CONSOLE: Self = Self(2);
	pub const WEB: Self = Self(3);

	/// Set on chat rooms belonging to a clan.
	pub const CHAT_CLAN: Self = Self((Self::MASK + 1) >> 1);

	/// Set on lobby chat rooms.
	pub const CHAT_LOBBY: Self = Self((Self::MASK + 1) >> 2);

	/// Set on matchmaking lobby chat rooms.
	pub const CHAT_MMS_LOBBY: Self = Self((Self::MASK + 1) >> 3);

	/// Extracts the account instance bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(((bits >> 32) as u32) & Self::MASK)
	}

	/// Creates an [`AccountInstance`] from a raw value.
	///
	/// Returns [`None`] if `value` does not fit into 20 bits.
	pub const fn new(value: u32) -> Option<Self>
	{
		if value > Self::MASK { None } else { Some(Self(value)) }
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u32
	{
		self.0
	}

	/// Returns whether every bit set in `flags` is also set in `self`.
	pub const fn contains(self, flags: Self) -> bool
	{
		(self.0 & flags.0) == flags.0
	}

	/// Returns `self` with the bits of `flags` set.
	pub const fn with(self, flags: Self) -> Self
	{
		Self(self.0 | flags.0)
	}
}

impl Default for AccountInstance
{
	fn default() -> Self
	{
		Self::ALL
	}
}

impl BitOr for AccountInstance
{
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output
	{
		self.with(rhs)
	}
}

impl fmt::Display for AccountInstance
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		fmt::Display::fmt(&self.0, fmt)
	}
}
