//! Damage calculation and application.

/// Calculate damage from a landed attack.
///
/// # Formula
///
/// ```text
/// final_damage = max(0, damage - protection) + variance
/// ```
///
/// `variance` is a pre-rolled bonus in `0..=CombatParams::variance_max`.
pub fn calculate_damage(damage: u32, protection: u32, variance: u32) -> u32 {
    damage.saturating_sub(protection) + variance
}

/// Apply damage to current HP, clamped at zero.
///
/// Returns `(new_hp, applied)`, where `applied` never exceeds `current_hp`.
pub fn apply_damage(current_hp: u32, damage: u32) -> (u32, u32) {
    let new_hp = current_hp.saturating_sub(damage);
    (new_hp, current_hp - new_hp)
}
