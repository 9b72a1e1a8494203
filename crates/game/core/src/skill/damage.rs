//! Damage calculation for generic skills.

/// Share of `force * attack` dealt as raw damage.
pub const FORCE_SCALE: f64 = 0.05;

/// Fraction of raw damage mitigated per point of defense.
pub const DEFENSE_SCALE: f64 = 0.01;

/// Calculate the damage a generic skill deals to one target.
///
/// # Formula
///
/// ```text
/// damage    = force * attack * 0.05
/// reduction = damage * (defense * 0.01)
/// final     = damage - reduction
/// ```
///
/// Returns `None` when the final damage is negative (defense above 100), in
/// which case the target is left untouched.
pub fn calculate_damage(force: i32, attack: i32, defense: i32) -> Option<f64> {
    let damage = f64::from(force) * f64::from(attack) * FORCE_SCALE;
    let reduction = damage * (f64::from(defense) * DEFENSE_SCALE);
    let final_damage = damage - reduction;

    if final_damage < 0.0 {
        None
    } else {
        Some(final_damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_example() {
        // force 20, attack 10, defense 10: 10 raw, 1 mitigated.
        assert_eq!(calculate_damage(20, 10, 10), Some(9.0));
    }

    #[test]
    fn zero_defense_takes_full_damage() {
        assert_eq!(calculate_damage(40, 5, 0), Some(10.0));
    }

    #[test]
    fn defense_above_hundred_blocks_everything() {
        assert_eq!(calculate_damage(20, 10, 150), None);
        assert_eq!(calculate_damage(20, 10, 100), Some(0.0));
    }
}
