use crate::{InvalidTradeUrl, SteamId, parse::is_digits};

const PREFIX: &str = "https://steamcommunity.com/tradeoffer/new/?partner=";
const TOKEN_SEPARATOR: &str = "&token=";

/// Splits a trade offer URL into its partner account number and token.
pub(crate) fn parse(url: &str) -> Result<(u32, &str), InvalidTradeUrl>
{
	let invalid = || InvalidTradeUrl { url: url.to_owned() };

	let (partner, token) = url
		.strip_prefix(PREFIX)
		.and_then(|rest| rest.split_once(TOKEN_SEPARATOR))
		.ok_or_else(invalid)?;

	if !is_digits(partner) || !is_token(token) {
		return Err(invalid());
	}

	let partner = partner.parse::<u32>().map_err(|_| invalid())?;

	Ok((partner, token))
}

/// `^[\w-]+$` with ASCII word characters.
fn is_token(value: &str) -> bool
{
	!value.is_empty()
		&& value
			.bytes()
			.all(|byte| byte.is_ascii_alphanumeric() || matches!(byte, b'_' | b'-'))
}

impl SteamId
{
	/// Creates a [`SteamId`] from a trade offer URL.
	///
	/// The result is a public desktop individual account whose account number is the URL's
	/// `partner` parameter, carrying the URL's `token` parameter verbatim.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// let steam_id = SteamId::from_trade_url(
	/// 	"https://steamcommunity.com/tradeoffer/new/?partner=474816273&token=RZbHYcrV",
	/// )
	/// .unwrap();
	///
	/// assert_eq!(steam_id.to_string(), "76561198435082001");
	/// assert_eq!(steam_id.token(), Some("RZbHYcrV"));
	/// ```
	pub fn from_trade_url(url: &str) -> Result<Self, InvalidTradeUrl>
	{
		let (partner, token) = parse(url)?;

		Ok(Self { token: Some(token.into()), ..Self::from_individual_account_number(partner) })
	}
}
