use ::rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::SteamId;

/// Samples valid public individual accounts.
impl Distribution<SteamId> for StandardUniform
{
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SteamId
	{
		SteamId::from_individual_account_number(rng.random_range(1..=u32::MAX))
	}
}

#[cfg(test)]
mod tests
{
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	#[test]
	fn samples_are_valid_individuals()
	{
		let mut rng = StdRng::seed_from_u64(0x5EED);

		for _ in 0..1000 {
			let steam_id = rng.random::<SteamId>();

			assert!(steam_id.is_valid_individual(), "{steam_id}");

			assert!(matches!(
				steam_id.render_steam3().parse::<SteamId>(),
				Ok(reparsed) if reparsed.account_number() == steam_id.account_number(),
			));
		}
	}
}
