//! Identifier minting for entities created at request time.
//!
//! Goals, diagnostics, and generated exercises created through the API carry
//! short numeric string ids in the 1000..=9999 range. The range is inclusive
//! at both ends and small enough to stay readable in frontend fixtures.

use rand::Rng;

/// Mints a fresh four digit entity id as a decimal string.
pub fn random_entity_id(rng: &mut impl Rng) -> String {
    rng.random_range(1000..=9999_u32).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn ids_are_four_digit_strings() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let id = random_entity_id(&mut rng);
            assert_eq!(id.len(), 4);
            let value: u32 = id.parse().unwrap();
            assert!((1000..=9999).contains(&value));
        }
    }

    #[test]
    fn ids_vary_across_draws() {
        let mut rng = SmallRng::seed_from_u64(42);
        let first = random_entity_id(&mut rng);
        let mut saw_other = false;
        for _ in 0..50 {
            if random_entity_id(&mut rng) != first {
                saw_other = true;
                break;
            }
        }
        assert!(saw_other);
    }
}
