/// Error type for conversions from strings to [`SteamId`]
///
/// [`SteamId`]: crate::SteamId
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("failed to parse SteamID: {_variant}")]
pub enum ParseSteamIdError
{
	/// The input was empty.
	#[display("empty input")]
	EmptyInput,

	/// The input did not match any known format.
	#[display("unknown format `{input}`")]
	UnrecognizedFormat
	{
		input: String
	},

	/// The format was recognized, but one of the numbers does not fit into its field.
	#[display("number out of range in `{input}`")]
	NumericOverflow
	{
		input: String
	},
}

/// Error type for [`SteamId::from_trade_url()`]
///
/// [`SteamId::from_trade_url()`]: crate::SteamId::from_trade_url
#[derive(Debug, Display, Error, PartialEq, Eq)]
#[display("invalid trade url `{url}`")]
pub struct InvalidTradeUrl
{
	pub url: String,
}
