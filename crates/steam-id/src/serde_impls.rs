use {
	crate::SteamId,
	serde::{
		de::{self, Deserialize, Deserializer},
		ser::{Serialize, Serializer},
	},
	std::fmt,
};

/// By default [`SteamId`] serializes as a stringified SteamID64.
///
/// Use `#[serde(serialize_with = "…")]` with one of the `SteamId::serialize_*` functions for the
/// other formats. The trade offer token is never serialized.
impl Serialize for SteamId
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_u64_stringified(serializer)
	}
}

/// Accepts integers (SteamID64) and any string [`SteamId::parse()`] accepts.
impl<'de> Deserialize<'de> for SteamId
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor
		{
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
			{
				fmt.write_str("a SteamID")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				Ok(SteamId::from_u64(value))
			}

			fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				u64::try_from(value)
					.map(SteamId::from_u64)
					.map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				SteamId::parse(value).map_err(E::custom)
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}

impl SteamId
{
	/// Serializes using the SteamID64 format.
	pub fn serialize_u64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}

	/// Serializes using a stringified version of the SteamID64 format.
	pub fn serialize_u64_stringified<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{}", self.as_u64()).serialize(serializer)
	}

	/// Serializes using the Steam2ID format.
	pub fn serialize_steam2<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{}", self.steam2()).serialize(serializer)
	}

	/// Serializes using the Steam3ID format.
	pub fn serialize_steam3<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{}", self.steam3()).serialize(serializer)
	}
}

#[cfg(test)]
mod tests
{
	use super::*;

	#[derive(serde::Serialize)]
	struct Formats
	{
		default: SteamId,

		#[serde(serialize_with = "SteamId::serialize_u64")]
		number: SteamId,

		#[serde(serialize_with = "SteamId::serialize_steam2")]
		steam2: SteamId,

		#[serde(serialize_with = "SteamId::serialize_steam3")]
		steam3: SteamId,
	}

	#[test]
	fn serializes_every_format()
	{
		let steam_id = SteamId::from_individual_account_number(474816273);
		let Ok(json) = serde_json::to_value(Formats {
			default: steam_id.clone(),
			number: steam_id.clone(),
			steam2: steam_id.clone(),
			steam3: steam_id,
		}) else {
			panic!("failed to serialize");
		};

		assert_eq!(
			json,
			serde_json::json!({
				"default": "76561198435082001",
				"number": 76561198435082001_u64,
				"steam2": "STEAM_0:1:237408136",
				"steam3": "[U:1:474816273]",
			}),
		);
	}

	#[test]
	fn deserializes_numbers_and_strings()
	{
		let expected = SteamId::from_individual_account_number(474816273);

		for json in [
			"76561198435082001",
			"\"76561198435082001\"",
			"\"STEAM_0:1:237408136\"",
			"\"STEAM_1:1:237408136\"",
		] {
			assert!(
				matches!(serde_json::from_str::<SteamId>(json), Ok(ref steam_id) if *steam_id == expected),
				"{json}",
			);
		}
	}

	#[test]
	fn rejects_garbage()
	{
		for json in ["\"not-an-id\"", "-1", "true"] {
			if let Ok(steam_id) = serde_json::from_str::<SteamId>(json) {
				panic!("`{json}` deserialized to {steam_id:?}");
			}
		}
	}
}
