//! The textual formats accepted by [`SteamId::parse()`].
//!
//! Every format is a matcher that either declines the input (`None`), or claims it and decodes
//! it. Formats are tried in [`FORMATS`] order and the first one to claim the input wins.

use crate::{
	AccountInstance,
	AccountNumber,
	AccountType,
	AccountUniverse,
	ParseSteamIdError,
	SteamId,
};

type Matcher = fn(&str) -> Option<Result<SteamId, ParseSteamIdError>>;

/// Known formats, in the order they are tried.
pub(crate) const FORMATS: [(&str, Matcher); 3] =
	[("SteamID64", steam_id64), ("Steam2ID", steam2_id), ("Steam3ID", steam3_id)];

pub(crate) fn parse(input: &str) -> Result<SteamId, ParseSteamIdError>
{
	if input.is_empty() {
		return Err(ParseSteamIdError::EmptyInput);
	}

	for (name, matcher) in FORMATS {
		if let Some(result) = matcher(input) {
			tracing::trace!(input, format = name, ok = result.is_ok(), "matched SteamID format");
			return result;
		}
	}

	tracing::debug!(input, "input does not match any SteamID format");

	Err(ParseSteamIdError::UnrecognizedFormat { input: input.to_owned() })
}

/// `76561198435082001`
///
/// The full unsigned range is accepted, so values at or above 2^63 decode with a universe of 128
/// or more instead of overflowing.
fn steam_id64(input: &str) -> Option<Result<SteamId, ParseSteamIdError>>
{
	if !is_digits(input) {
		return None;
	}

	Some(input.parse::<u64>().map(SteamId::from_u64).map_err(|_| overflow(input)))
}

/// `STEAM_0:1:237408136`
fn steam2_id(input: &str) -> Option<Result<SteamId, ParseSteamIdError>>
{
	let mut segments = input.strip_prefix("STEAM_")?.split(':');

	let universe = match segments.next()? {
		"0" => AccountUniverse::Public,
		universe @ ("1" | "2" | "3" | "4" | "5") => AccountUniverse::from_raw(digit(universe)),
		_ => return None,
	};

	let y = match segments.next()? {
		"0" => 0_u64,
		"1" => 1_u64,
		_ => return None,
	};

	let z = segments.next().filter(|segment| is_digits(segment))?;

	if segments.next().is_some() {
		return None;
	}

	let account_number = z
		.parse::<u64>()
		.ok()
		.and_then(|z| z.checked_mul(2))
		.and_then(|double_z| double_z.checked_add(y))
		.and_then(|number| u32::try_from(number).ok())
		.map(AccountNumber::new);

	Some(
		account_number
			.map(|account_number| SteamId {
				account_universe: universe,
				account_type: AccountType::Individual,
				account_instance: AccountInstance::DESKTOP,
				account_number,
				token: None,
			})
			.ok_or_else(|| overflow(input)),
	)
}

/// `[U:1:474816273]`, `[A:1:2:3]`
fn steam3_id(input: &str) -> Option<Result<SteamId, ParseSteamIdError>>
{
	let mut segments = input.strip_prefix('[')?.strip_suffix(']')?.split(':');

	let code = match segments.next()?.as_bytes() {
		&[code] if code.is_ascii_alphabetic() => char::from(code),
		_ => return None,
	};

	let universe = match segments.next()? {
		universe @ ("0" | "1" | "2" | "3" | "4" | "5") => AccountUniverse::from_raw(digit(universe)),
		_ => return None,
	};

	let account_number = segments.next().filter(|number| is_digits(number))?;
	let instance = match segments.next() {
		None => None,
		Some(instance) if is_digits(instance) => Some(instance),
		Some(_) => return None,
	};

	if segments.next().is_some() {
		return None;
	}

	let Ok(account_number) = account_number.parse::<u32>() else {
		return Some(Err(overflow(input)));
	};

	let explicit_instance = match instance.map(str::parse::<u32>) {
		None => None,
		Some(Ok(raw)) => match AccountInstance::new(raw) {
			Some(instance) => Some(instance),
			None => return Some(Err(overflow(input))),
		},
		Some(Err(_)) => return Some(Err(overflow(input))),
	};

	let mut account_instance = explicit_instance.unwrap_or_default();

	let account_type = match code {
		'U' => {
			if explicit_instance.is_some() {
				account_instance = AccountInstance::DESKTOP;
			}

			AccountType::Individual
		}
		'c' => {
			account_instance = account_instance | AccountInstance::CHAT_CLAN;
			AccountType::Clan
		}
		'L' => {
			account_instance = account_instance | AccountInstance::CHAT_LOBBY;
			AccountType::Chat
		}
		other => AccountType::from_code(other),
	};

	Some(Ok(SteamId {
		account_universe: universe,
		account_type,
		account_instance,
		account_number: AccountNumber::new(account_number),
		token: None,
	}))
}

/// `^\d+$` with ASCII digits.
pub(crate) fn is_digits(value: &str) -> bool
{
	!value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

/// Value of a single-digit segment already checked by the caller.
fn digit(value: &str) -> u8
{
	value.bytes().next().map_or(0, |byte| byte - b'0')
}

fn overflow(input: &str) -> ParseSteamIdError
{
	ParseSteamIdError::NumericOverflow { input: input.to_owned() }
}

#[cfg(test)]
mod tests
{
	use super::*;

	fn parsed(input: &str) -> SteamId
	{
		match parse(input) {
			Ok(steam_id) => steam_id,
			Err(error) => panic!("failed to parse `{input}`: {error}"),
		}
	}

	#[test]
	fn empty_input()
	{
		assert_eq!(parse(""), Err(ParseSteamIdError::EmptyInput));
	}

	#[test]
	fn unrecognized_input_is_reported()
	{
		assert_eq!(
			parse("not-an-id"),
			Err(ParseSteamIdError::UnrecognizedFormat { input: String::from("not-an-id") }),
		);
	}

	#[test]
	fn steam_id64_decodes_every_field()
	{
		let bits = (3_u64 << 56) | (8_u64 << 52) | (0x8_0001_u64 << 32) | 1234;
		let steam_id = parsed(&bits.to_string());

		assert_eq!(steam_id.account_universe(), AccountUniverse::Internal);
		assert_eq!(steam_id.account_type(), AccountType::Chat);
		assert_eq!(steam_id.account_instance().raw(), 0x8_0001);
		assert_eq!(steam_id.account_number().raw(), 1234);
	}

	#[test]
	fn steam_id64_keeps_unknown_bits()
	{
		let steam_id = parsed(&u64::MAX.to_string());

		assert_eq!(steam_id.account_universe(), AccountUniverse::Unknown(255));
		assert_eq!(steam_id.account_type(), AccountType::Unknown(15));
		assert_eq!(steam_id.as_u64(), u64::MAX);
	}

	#[test]
	fn steam_id64_accepts_values_above_i64_max()
	{
		let steam_id = parsed("9223372036854775808");

		assert_eq!(steam_id.account_universe(), AccountUniverse::Unknown(128));
		assert_eq!(steam_id.account_type(), AccountType::Invalid);
		assert_eq!(steam_id.as_u64(), 1_u64 << 63);
		assert!(!steam_id.is_valid());
	}

	#[test]
	fn steam_id64_overflow()
	{
		assert!(matches!(
			parse("18446744073709551616"),
			Err(ParseSteamIdError::NumericOverflow { .. }),
		));
	}

	#[test]
	fn steam_id64_rejects_signs()
	{
		assert!(matches!(parse("+1"), Err(ParseSteamIdError::UnrecognizedFormat { .. })));
		assert!(matches!(parse("-1"), Err(ParseSteamIdError::UnrecognizedFormat { .. })));
	}

	#[test]
	fn steam2_id_universe_zero_is_public()
	{
		let steam_id = parsed("STEAM_0:1:237408136");

		assert_eq!(steam_id.account_universe(), AccountUniverse::Public);
		assert_eq!(steam_id.account_type(), AccountType::Individual);
		assert_eq!(steam_id.account_instance(), AccountInstance::DESKTOP);
		assert_eq!(steam_id.account_number().raw(), 474816273);
	}

	#[test]
	fn steam2_id_keeps_other_universes()
	{
		assert_eq!(parsed("STEAM_1:0:5").account_universe(), AccountUniverse::Public);
		assert_eq!(parsed("STEAM_4:0:5").account_universe(), AccountUniverse::Dev);
		assert_eq!(parsed("STEAM_5:0:5").account_universe(), AccountUniverse::Unknown(5));
	}

	#[test]
	fn steam2_id_rejects_malformed_segments()
	{
		for input in [
			"STEAM_6:1:5",
			"STEAM_0:2:5",
			"STEAM_0:1:",
			"STEAM_0:1:5:6",
			"STEAM_0:1:x",
			"STEAM_01:1:5",
			"steam_0:1:5",
		] {
			assert!(
				matches!(parse(input), Err(ParseSteamIdError::UnrecognizedFormat { .. })),
				"{input}",
			);
		}
	}

	#[test]
	fn steam2_id_overflow()
	{
		assert!(matches!(
			parse("STEAM_0:1:2147483647"),
			Ok(steam_id) if steam_id.account_number().raw() == u32::MAX,
		));
		assert!(matches!(
			parse("STEAM_0:0:2147483648"),
			Err(ParseSteamIdError::NumericOverflow { .. }),
		));
	}

	#[test]
	fn steam3_id_individual_without_instance_keeps_all()
	{
		let steam_id = parsed("[U:1:474816273]");

		assert_eq!(steam_id.account_type(), AccountType::Individual);
		assert_eq!(steam_id.account_instance(), AccountInstance::ALL);
		assert_eq!(steam_id.account_number().raw(), 474816273);
	}

	#[test]
	fn steam3_id_individual_instance_is_normalized()
	{
		let steam_id = parsed("[U:1:474816273:3]");

		assert_eq!(steam_id.account_instance(), AccountInstance::DESKTOP);
	}

	#[test]
	fn steam3_id_clan_letter_sets_flag()
	{
		let steam_id = parsed("[c:1:4]");

		assert_eq!(steam_id.account_type(), AccountType::Clan);
		assert_eq!(steam_id.account_instance(), AccountInstance::CHAT_CLAN);
	}

	#[test]
	fn steam3_id_lobby_letter_sets_flag()
	{
		let steam_id = parsed("[L:1:4:2]");

		assert_eq!(steam_id.account_type(), AccountType::Chat);
		assert_eq!(steam_id.account_instance().raw(), AccountInstance::CHAT_LOBBY.raw() | 2);
	}

	#[test]
	fn steam3_id_looks_up_other_letters()
	{
		assert_eq!(parsed("[g:1:4]").account_type(), AccountType::Clan);
		assert_eq!(parsed("[A:1:4:7]").account_instance().raw(), 7);
		assert_eq!(parsed("[Z:1:4]").account_type(), AccountType::Invalid);
	}

	#[test]
	fn steam3_id_rejects_malformed_segments()
	{
		for input in ["[U:1:5", "U:1:5]", "[UU:1:5]", "[1:1:5]", "[U:6:5]", "[U:1:]", "[U:1:5:]", "[U:1:5:6:7]"]
		{
			assert!(
				matches!(parse(input), Err(ParseSteamIdError::UnrecognizedFormat { .. })),
				"{input}",
			);
		}
	}

	#[test]
	fn steam3_id_overflow()
	{
		assert!(matches!(parse("[U:1:4294967296]"), Err(ParseSteamIdError::NumericOverflow { .. })));
		assert!(matches!(parse("[A:1:5:1048576]"), Err(ParseSteamIdError::NumericOverflow { .. })));
		assert!(matches!(
			parse("[A:1:5:1048575]"),
			Ok(steam_id) if steam_id.account_instance().raw() == 0xF_FFFF,
		));
	}
}
