//! Hit chance: accuracy contested against evasion.

use super::CombatParams;

/// Calculate hit chance based on accuracy vs evasion.
///
/// # Formula
///
/// ```text
/// hit_chance = base + (accuracy - evasion) * step
/// clamped to [min, max]
/// ```
///
/// Returns the chance as a percentage.
pub fn calculate_hit_chance(accuracy: u32, evasion: u32, params: &CombatParams) -> u32 {
    let stat_diff = accuracy as i64 - evasion as i64;
    let hit_chance = params.hit_base as i64 + stat_diff * params.hit_step as i64;

    hit_chance.clamp(params.hit_min as i64, params.hit_max as i64) as u32
}

/// `true` if a d100 `roll` lands inside the hit chance.
pub fn check_hit(accuracy: u32, evasion: u32, roll: u32, params: &CombatParams) -> bool {
    roll <= calculate_hit_chance(accuracy, evasion, params)
}
