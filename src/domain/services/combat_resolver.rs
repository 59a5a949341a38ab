//! Combat resolver - single-exchange hit/miss and damage resolution
//!
//! The random source is injected by the caller so outcomes reproduce under a
//! fixed seed and independent exchanges never share state. Malformed inputs
//! fail loudly instead of being clamped; silent clamping would let boundary
//! configuration bugs masquerade as game balance.

use rand::Rng;

use crate::domain::entities::CombatExchange;
use crate::domain::error::EngineError;
use crate::domain::value_objects::DerivedAttributes;

/// Baseline chance to hit before the accuracy/evasion differential
const BASE_HIT_CHANCE: f64 = 0.60;
/// Hit chance per point of (accuracy - evasion)
const HIT_CHANCE_PER_POINT: f64 = 0.01;
/// Outcomes are never fully deterministic: chance stays inside this band
const HIT_CHANCE_FLOOR: f64 = 0.05;
const HIT_CHANCE_CEILING: f64 = 0.95;

/// Resolve one combat exchange between attacker and defender
///
/// Fails with `InvalidCombatInput` if `weapon_damage` or `armor_value` is
/// negative. Damage is floored at 0 and is always 0 on a miss.
pub fn resolve(
    attacker: &DerivedAttributes,
    defender: &DerivedAttributes,
    weapon_damage: i32,
    armor_value: i32,
    rng: &mut impl Rng,
) -> Result<CombatExchange, EngineError> {
    if weapon_damage < 0 {
        return Err(EngineError::InvalidCombatInput(format!(
            "weapon_damage must be non-negative, got {weapon_damage}"
        )));
    }
    if armor_value < 0 {
        return Err(EngineError::InvalidCombatInput(format!(
            "armor_value must be non-negative, got {armor_value}"
        )));
    }

    let hit_chance = hit_chance(attacker.accuracy, defender.evasion);
    let hit_success = rng.gen::<f64>() < hit_chance;

    let damage_dealt = if hit_success {
        let raw = weapon_damage.saturating_add(attacker.attack_power);
        // Additive mitigation: armor plus half the defender's mitigation
        let reduction = armor_value.saturating_add(defender.mitigation / 2);
        raw.saturating_sub(reduction).max(0)
    } else {
        0
    };

    Ok(CombatExchange {
        hit_success,
        damage_dealt,
        hit_chance,
    })
}

fn hit_chance(accuracy: i32, evasion: i32) -> f64 {
    let differential = f64::from(accuracy.saturating_sub(evasion));
    (BASE_HIT_CHANCE + differential * HIT_CHANCE_PER_POINT)
        .clamp(HIT_CHANCE_FLOOR, HIT_CHANCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::attribute_deriver;
    use crate::domain::value_objects::Attributes;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fighter() -> DerivedAttributes {
        attribute_deriver::derive(&Attributes::new(15, 12, 10, 0), 5).unwrap()
    }

    fn brute() -> DerivedAttributes {
        attribute_deriver::derive(&Attributes::new(18, 4, 14, 2), 5).unwrap()
    }

    #[test]
    fn damage_is_never_negative_and_zero_on_miss() {
        let attacker = fighter();
        let defender = brute();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let exchange = resolve(&attacker, &defender, 15, 8, &mut rng).unwrap();
            assert!(exchange.damage_dealt >= 0);
            if !exchange.hit_success {
                assert_eq!(exchange.damage_dealt, 0);
            }
        }
    }

    #[test]
    fn fixed_seed_reproduces_the_exchange() {
        let attacker = fighter();
        let defender = brute();

        let mut first_rng = StdRng::seed_from_u64(42);
        let first = resolve(&attacker, &defender, 15, 8, &mut first_rng).unwrap();

        let mut second_rng = StdRng::seed_from_u64(42);
        let second = resolve(&attacker, &defender, 15, 8, &mut second_rng).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn negative_inputs_are_rejected_not_clamped() {
        let attacker = fighter();
        let defender = brute();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            resolve(&attacker, &defender, -1, 8, &mut rng),
            Err(EngineError::InvalidCombatInput(_))
        ));
        assert!(matches!(
            resolve(&attacker, &defender, 15, -3, &mut rng),
            Err(EngineError::InvalidCombatInput(_))
        ));
    }

    #[test]
    fn hit_chance_stays_inside_the_configured_band() {
        // Hopeless attacker still has the floor chance
        assert_eq!(hit_chance(0, 10_000), HIT_CHANCE_FLOOR);
        // Overwhelming attacker is still capped
        assert_eq!(hit_chance(10_000, 0), HIT_CHANCE_CEILING);
        // Inside the band, more evasion means a lower chance
        assert!((hit_chance(30, 10) - 0.80).abs() < 1e-9);
        assert!((hit_chance(30, 30) - 0.60).abs() < 1e-9);
        assert!(hit_chance(30, 10) > hit_chance(30, 30));
    }

    #[test]
    fn heavier_armor_never_increases_damage() {
        let attacker = fighter();
        let defender = brute();

        // Same draw for both resolutions so only armor differs
        let mut light_rng = StdRng::seed_from_u64(7);
        let mut heavy_rng = StdRng::seed_from_u64(7);
        let light = resolve(&attacker, &defender, 30, 2, &mut light_rng).unwrap();
        let heavy = resolve(&attacker, &defender, 30, 20, &mut heavy_rng).unwrap();

        assert_eq!(light.hit_success, heavy.hit_success);
        assert!(heavy.damage_dealt <= light.damage_dealt);
    }
}
