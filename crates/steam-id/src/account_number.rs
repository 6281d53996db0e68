/// Steam account number bits
///
/// The low 32 bits of a SteamID64.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct AccountNumber(u32);

impl AccountNumber
{
	/// Extracts the account number bits from a raw 64-bit SteamID.
	pub const fn from_bits(bits: u64) -> Self
	{
		Self(bits as u32)
	}

	pub const fn new(value: u32) -> Self
	{
		Self(value)
	}

	/// Returns the raw integer value.
	pub const fn raw(self) -> u32
	{
		self.0
	}

	/// The `Y` segment of a Steam2ID (`STEAM_X:Y:Z`).
	pub const fn y(self) -> u32
	{
		self.0 & 1
	}

	/// The `Z` segment of a Steam2ID (`STEAM_X:Y:Z`).
	pub const fn z(self) -> u32
	{
		self.0 >> 1
	}
}
