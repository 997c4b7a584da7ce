//! Authoritative arena state.
//!
//! The engine owns this state and mutates it only while handling an event.
//! Runners and agents never see it directly; they get snapshots.
mod common;

pub use common::{Direction, GladiatorId, Position, Tick};

use crate::dungeon::Dungeon;
use crate::gladiator::Gladiator;

/// World data the rules operate on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaState {
    pub gladiators: Vec<Gladiator>,
    pub dungeon: Dungeon,
    /// Simulated time of the last executed event.
    pub clock: Tick,
    /// Number of events executed so far. Mixed into every roll seed.
    pub nonce: u64,
}

impl ArenaState {
    pub fn new(gladiators: Vec<Gladiator>, dungeon: Dungeon) -> Self {
        Self {
            gladiators,
            dungeon,
            clock: Tick::ZERO,
            nonce: 0,
        }
    }

    pub fn gladiator(&self, id: GladiatorId) -> Option<&Gladiator> {
        self.gladiators.get(id.index())
    }

    pub fn gladiator_mut(&mut self, id: GladiatorId) -> Option<&mut Gladiator> {
        self.gladiators.get_mut(id.index())
    }

    /// Two distinct gladiators borrowed mutably at once.
    pub fn pair_mut(
        &mut self,
        a: GladiatorId,
        b: GladiatorId,
    ) -> Option<(&mut Gladiator, &mut Gladiator)> {
        let (i, j) = (a.index(), b.index());
        if i == j || i >= self.gladiators.len() || j >= self.gladiators.len() {
            return None;
        }
        if i < j {
            let (left, right) = self.gladiators.split_at_mut(j);
            Some((&mut left[i], &mut right[0]))
        } else {
            let (left, right) = self.gladiators.split_at_mut(i);
            Some((&mut right[0], &mut left[j]))
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = GladiatorId> + use<> {
        (0..self.gladiators.len()).map(GladiatorId)
    }

    /// `true` if a living gladiator stands on `pos`.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.gladiators
            .iter()
            .any(|g| g.is_alive() && g.pos() == pos)
    }

    /// Distinct teams that still have a living member.
    pub fn living_teams(&self) -> Vec<u32> {
        let mut teams: Vec<u32> = self
            .gladiators
            .iter()
            .filter(|g| g.is_alive())
            .map(|g| g.team)
            .collect();
        teams.sort_unstable();
        teams.dedup();
        teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Bounds, Dungeon};
    use crate::gladiator::{BaseSkills, BaseStats};

    fn state() -> ArenaState {
        let gladiators = (0..3)
            .map(|i| {
                Gladiator::new(
                    format!("g{i}"),
                    i as u32,
                    BaseStats::default(),
                    BaseSkills::default(),
                    Position::new(i, 0),
                )
            })
            .collect();
        ArenaState::new(
            gladiators,
            Dungeon::new(Bounds::new(Position::ORIGIN, Position::new(2, 0))),
        )
    }

    #[test]
    fn pair_mut_in_either_order() {
        let mut s = state();
        let (a, b) = s.pair_mut(GladiatorId(2), GladiatorId(0)).unwrap();
        assert_eq!(a.name, "g2");
        assert_eq!(b.name, "g0");
        assert!(s.pair_mut(GladiatorId(1), GladiatorId(1)).is_none());
        assert!(s.pair_mut(GladiatorId(1), GladiatorId(7)).is_none());
    }

    #[test]
    fn dead_do_not_occupy() {
        let mut s = state();
        assert!(s.is_occupied(Position::new(1, 0)));
        s.gladiators[1] = s.gladiators[1].clone().with_resources(0, 0);
        assert!(!s.is_occupied(Position::new(1, 0)));
        assert_eq!(s.living_teams(), vec![0, 2]);
    }
}
