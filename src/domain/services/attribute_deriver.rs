//! Attribute deriver - pure derivation of combat statistics
//!
//! The formulas are an engine policy choice; the load-bearing contract is that
//! derivation is deterministic and monotone: raising any contributing base
//! attribute or the level never lowers a derived value. Saturating arithmetic
//! keeps absurd inputs from wrapping.

use crate::domain::error::EngineError;
use crate::domain::value_objects::{Attributes, DerivedAttributes};

/// Derive combat statistics from base attributes and level
///
/// Fails with `InvalidAttributes` if any base value is negative and
/// `InvalidLevel` if `level < 1`. Pure and total over valid inputs.
pub fn derive(attributes: &Attributes, level: i32) -> Result<DerivedAttributes, EngineError> {
    if !attributes.is_valid() {
        return Err(EngineError::InvalidAttributes);
    }
    if level < 1 {
        return Err(EngineError::InvalidLevel(level));
    }

    let health = 50_i32
        .saturating_add(attributes.might.saturating_mul(8))
        .saturating_add(attributes.will.saturating_mul(4))
        .saturating_add(level.saturating_mul(12));
    let mana = 20_i32
        .saturating_add(attributes.intellect.saturating_mul(10))
        .saturating_add(level.saturating_mul(6));
    let accuracy = 70_i32
        .saturating_add(attributes.intellect.saturating_mul(2))
        .saturating_add(level.saturating_mul(2));
    let evasion = 5_i32
        .saturating_add(attributes.shadow.saturating_mul(2))
        .saturating_add(level);
    let mitigation = attributes.will.saturating_mul(2).saturating_add(level);
    let attack_power = attributes
        .might
        .saturating_mul(2)
        .saturating_add(attributes.shadow);

    Ok(DerivedAttributes {
        health,
        mana,
        accuracy,
        evasion,
        mitigation,
        attack_power,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let attrs = Attributes::new(15, 12, 10, 0);
        let first = derive(&attrs, 5).unwrap();
        let second = derive(&attrs, 5).unwrap();

        assert_eq!(first, second);
        assert!(first.health > 0);
        assert!(first.mana > 0);
    }

    #[test]
    fn derive_computes_the_documented_formulas() {
        let attrs = Attributes::new(15, 12, 10, 0);
        let derived = derive(&attrs, 5).unwrap();

        assert_eq!(derived.health, 50 + 15 * 8 + 10 * 4 + 5 * 12);
        assert_eq!(derived.mana, 20 + 12 * 10 + 5 * 6);
        assert_eq!(derived.accuracy, 70 + 12 * 2 + 5 * 2);
        assert_eq!(derived.evasion, 5 + 0 * 2 + 5);
        assert_eq!(derived.mitigation, 10 * 2 + 5);
        assert_eq!(derived.attack_power, 15 * 2);
    }

    #[test]
    fn derive_rejects_negative_attributes() {
        let attrs = Attributes::new(10, -1, 10, 0);
        assert_eq!(derive(&attrs, 3), Err(EngineError::InvalidAttributes));
    }

    #[test]
    fn derive_rejects_level_below_one() {
        let attrs = Attributes::default();
        assert_eq!(derive(&attrs, 0), Err(EngineError::InvalidLevel(0)));
        assert_eq!(derive(&attrs, -4), Err(EngineError::InvalidLevel(-4)));
    }

    #[test]
    fn raising_a_contributing_attribute_never_lowers_its_outputs() {
        let base = Attributes::new(10, 10, 10, 5);
        let derived = derive(&base, 3).unwrap();

        let more_might = derive(&Attributes { might: 11, ..base }, 3).unwrap();
        assert!(more_might.health >= derived.health);
        assert!(more_might.attack_power >= derived.attack_power);

        let more_intellect = derive(
            &Attributes {
                intellect: 11,
                ..base
            },
            3,
        )
        .unwrap();
        assert!(more_intellect.mana >= derived.mana);
        assert!(more_intellect.accuracy >= derived.accuracy);

        let more_will = derive(&Attributes { will: 11, ..base }, 3).unwrap();
        assert!(more_will.health >= derived.health);
        assert!(more_will.mitigation >= derived.mitigation);

        let more_shadow = derive(&Attributes { shadow: 6, ..base }, 3).unwrap();
        assert!(more_shadow.evasion >= derived.evasion);
        assert!(more_shadow.attack_power >= derived.attack_power);
    }

    #[test]
    fn raising_level_never_lowers_any_output() {
        let attrs = Attributes::new(8, 8, 8, 2);
        let low = derive(&attrs, 1).unwrap();
        let high = derive(&attrs, 2).unwrap();

        assert!(high.health >= low.health);
        assert!(high.mana >= low.mana);
        assert!(high.accuracy >= low.accuracy);
        assert!(high.evasion >= low.evasion);
        assert!(high.mitigation >= low.mitigation);
    }

    #[test]
    fn extreme_inputs_saturate_instead_of_wrapping() {
        let attrs = Attributes::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        let derived = derive(&attrs, i32::MAX).unwrap();

        assert_eq!(derived.health, i32::MAX);
        assert_eq!(derived.mana, i32::MAX);
    }
}
