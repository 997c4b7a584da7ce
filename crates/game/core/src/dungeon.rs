//! The dungeon: an inclusive bounding box that closes in on the gladiators.

use crate::gladiator::Gladiator;
use crate::state::Position;

/// Inclusive axis-aligned box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub const fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    /// Minimal box containing every position, or `None` for an empty input.
    pub fn enclosing(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        positions.into_iter().fold(None, |acc, pos| {
            Some(match acc {
                None => Self::new(pos, pos),
                Some(b) => Self::new(
                    Position::new(b.min.x.min(pos.x), b.min.y.min(pos.y)),
                    Position::new(b.max.x.max(pos.x), b.max.y.max(pos.y)),
                ),
            })
        })
    }

    /// Grows the box by `margin` on every side.
    pub const fn padded(self, margin: i32) -> Self {
        Self::new(
            self.min.offset(-margin, -margin),
            self.max.offset(margin, margin),
        )
    }

    /// Inclusive on both ends.
    pub const fn contains(&self, pos: Position) -> bool {
        self.min.x <= pos.x && pos.x <= self.max.x && self.min.y <= pos.y && pos.y <= self.max.y
    }

    pub const fn width(&self) -> u32 {
        self.min.x.abs_diff(self.max.x).saturating_add(1)
    }

    pub const fn height(&self) -> u32 {
        self.min.y.abs_diff(self.max.y).saturating_add(1)
    }
}

/// How the dungeon is resized after each handled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShrinkPolicy {
    /// Minimal box around live gladiators.
    Tight,
    /// Minimal box grown by one tile on every side.
    Padded,
}

impl ShrinkPolicy {
    pub const fn margin(self) -> i32 {
        match self {
            ShrinkPolicy::Tight => 0,
            ShrinkPolicy::Padded => 1,
        }
    }
}

/// Spatial container for the fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dungeon {
    bounds: Bounds,
}

impl Dungeon {
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Initial dungeon: the padded box around the starting layout.
    pub fn around(positions: impl IntoIterator<Item = Position>) -> Option<Self> {
        Bounds::enclosing(positions).map(|b| Self::new(b.padded(1)))
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn within_bounds(&self, pos: Position) -> bool {
        self.bounds.contains(pos)
    }

    /// Recomputes bounds from live gladiator positions.
    ///
    /// Dead gladiators never count. With nobody alive the bounds are kept.
    pub fn shrink(&mut self, gladiators: &[Gladiator], policy: ShrinkPolicy) {
        let live = gladiators.iter().filter(|g| g.is_alive()).map(|g| g.pos());
        if let Some(tight) = Bounds::enclosing(live) {
            self.bounds = tight.padded(policy.margin());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gladiator::{BaseSkills, BaseStats};

    fn at(x: i32, y: i32) -> Gladiator {
        Gladiator::new("g", 0, BaseStats::default(), BaseSkills::default(), Position::new(x, y))
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Bounds::new(Position::new(0, 0), Position::new(2, 3));
        assert!(b.contains(Position::new(0, 0)));
        assert!(b.contains(Position::new(2, 3)));
        assert!(!b.contains(Position::new(3, 3)));
        assert!(!b.contains(Position::new(-1, 1)));
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 4);
    }

    #[test]
    fn initial_dungeon_is_padded() {
        let d = Dungeon::around([Position::new(0, 0), Position::new(2, 1)]).unwrap();
        assert_eq!(
            d.bounds(),
            Bounds::new(Position::new(-1, -1), Position::new(3, 2))
        );
    }

    #[test]
    fn tight_shrink_is_minimal_and_idempotent() {
        let gladiators = vec![at(0, 0), at(3, -2), at(1, 5)];
        let mut d = Dungeon::new(Bounds::new(Position::new(-10, -10), Position::new(10, 10)));
        d.shrink(&gladiators, ShrinkPolicy::Tight);
        let first = d.bounds();
        assert_eq!(first, Bounds::new(Position::new(0, -2), Position::new(3, 5)));
        d.shrink(&gladiators, ShrinkPolicy::Tight);
        assert_eq!(d.bounds(), first);
    }

    #[test]
    fn padded_shrink_adds_margin() {
        let gladiators = vec![at(0, 0), at(2, 2)];
        let mut d = Dungeon::new(Bounds::new(Position::ORIGIN, Position::ORIGIN));
        d.shrink(&gladiators, ShrinkPolicy::Padded);
        assert_eq!(
            d.bounds(),
            Bounds::new(Position::new(-1, -1), Position::new(3, 3))
        );
    }

    #[test]
    fn dead_gladiators_are_excluded() {
        let gladiators = vec![at(0, 0), at(1, 1), at(9, 9).with_resources(0, 0)];
        let mut d = Dungeon::new(Bounds::new(Position::ORIGIN, Position::new(9, 9)));
        d.shrink(&gladiators, ShrinkPolicy::Tight);
        assert_eq!(d.bounds(), Bounds::new(Position::new(0, 0), Position::new(1, 1)));
    }

    #[test]
    fn nobody_alive_keeps_bounds() {
        let gladiators = vec![at(4, 4).with_resources(0, 0)];
        let before = Bounds::new(Position::ORIGIN, Position::new(2, 2));
        let mut d = Dungeon::new(before);
        d.shrink(&gladiators, ShrinkPolicy::Tight);
        assert_eq!(d.bounds(), before);
    }

    #[test]
    fn padding_at_the_coordinate_limit_saturates() {
        let dungeon = Dungeon::around([Position::new(i32::MAX, i32::MIN)]).unwrap();
        let bounds = dungeon.bounds();
        assert_eq!(bounds.max.x, i32::MAX);
        assert_eq!(bounds.min.y, i32::MIN);
        assert_eq!(bounds.width(), 2);
        assert!(dungeon.within_bounds(Position::new(i32::MAX, i32::MIN)));
    }
}
