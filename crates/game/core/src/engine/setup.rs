//! Initial roster and layout.

use crate::config::{ArenaConfig, GladiatorSpec};
use crate::dungeon::Bounds;
use crate::gladiator::Gladiator;
use crate::rng::{Dice, RollPurpose};
use crate::state::Position;

/// Rolls per gladiator before falling back to a scan for a free cell.
const PLACEMENT_ATTEMPTS: u64 = 16;

/// Spawn area of the first rolled gladiator.
const FIRST_SPAWN: Bounds = Bounds::new(Position::ORIGIN, Position::new(2, 2));

/// Specs the roster is built from: explicit ones, or free-for-all defaults.
pub(super) fn roster_specs(config: &ArenaConfig) -> Vec<GladiatorSpec> {
    if !config.gladiators.is_empty() {
        return config.gladiators.clone();
    }
    (0..config.players)
        .map(|i| GladiatorSpec::new(format!("Gladiator {i}"), i as u32))
        .collect()
}

/// Builds the roster, placing every gladiator on a distinct cell.
///
/// Explicit positions are claimed first. The rest are rolled in roster order:
/// the first inside a 3x3 box at the origin, later ones inside the padded
/// box of everything already placed.
pub(super) fn build_roster(specs: &[GladiatorSpec], dice: &Dice) -> Vec<Gladiator> {
    let mut placed: Vec<Position> = specs.iter().filter_map(|spec| spec.pos).collect();
    let mut positions = Vec::with_capacity(specs.len());

    for (index, spec) in specs.iter().enumerate() {
        let pos = match spec.pos {
            Some(pos) => pos,
            None => {
                let area = Bounds::enclosing(placed.iter().copied())
                    .map(|b| b.padded(1))
                    .unwrap_or(FIRST_SPAWN);
                let pos = roll_free_cell(area, &placed, index, dice);
                placed.push(pos);
                pos
            }
        };
        positions.push(pos);
    }

    specs
        .iter()
        .zip(positions)
        .map(|(spec, pos)| {
            Gladiator::new(spec.name.clone(), spec.team, spec.stats, spec.skills, pos)
                .with_range(spec.range)
        })
        .collect()
}

fn roll_free_cell(area: Bounds, taken: &[Position], actor: usize, dice: &Dice) -> Position {
    for attempt in 0..PLACEMENT_ATTEMPTS {
        let dx = dice.range(attempt, actor, RollPurpose::SpawnX, 0, area.width() - 1);
        let dy = dice.range(attempt, actor, RollPurpose::SpawnY, 0, area.height() - 1);
        let pos = area.min.offset(dx as i32, dy as i32);
        if !taken.contains(&pos) {
            return pos;
        }
    }

    // The border of a padded box never holds a placed gladiator, so the scan
    // always finds a cell.
    (area.min.y..=area.max.y)
        .flat_map(|y| (area.min.x..=area.max.x).map(move |x| Position::new(x, y)))
        .find(|pos| !taken.contains(pos))
        .unwrap_or(area.max)
}
