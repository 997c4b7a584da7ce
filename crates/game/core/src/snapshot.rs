//! Owned, serializable views of a running game.
//!
//! Snapshots hold no references into the engine: they can be stored,
//! broadcast to agents or written to disk while the game keeps running.

use crate::action::{Move, MoveOption};
use crate::config::Variant;
use crate::dungeon::{Bounds, Dungeon};
use crate::event::Event;
use crate::gladiator::{BaseSkills, BaseStats, Boosts, Gladiator};
use crate::state::{GladiatorId, Position, Tick};

/// Full view of the game at one point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub clock: Tick,
    pub nonce: u64,
    pub variant: Variant,
    pub gladiators: Vec<GladiatorView>,
    pub dungeon: DungeonView,
    /// Pending events in execution order.
    pub queue: Vec<EventView>,
    pub scores: Vec<u32>,
    pub current_player: Option<GladiatorId>,
    /// Options of the player the snapshot was taken for.
    pub move_options: Option<Vec<MoveOption>>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn gladiator(&self, id: GladiatorId) -> Option<&GladiatorView> {
        self.gladiators.get(id.index())
    }

    /// Options offered to the snapshot's player, empty when none were requested.
    pub fn options(&self) -> &[MoveOption] {
        self.move_options.as_deref().unwrap_or(&[])
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GladiatorView {
    pub id: GladiatorId,
    pub name: String,
    pub team: u32,
    pub stats: BaseStats,
    /// Effective skills, boosts included.
    pub skills: BaseSkills,
    pub boosts: Boosts,
    pub pos: Position,
    pub range: u32,
    pub cur_hp: u32,
    pub max_hp: u32,
    pub cur_sp: u32,
    pub max_sp: u32,
    pub speed: u32,
    pub damage_dealt: u32,
    pub dead: bool,
}

impl GladiatorView {
    pub fn is_alive(&self) -> bool {
        !self.dead
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonView {
    pub bounds: Bounds,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventView {
    pub owner: GladiatorId,
    pub action: Move,
    pub time_stamp: Tick,
    pub origin: Position,
}

impl Gladiator {
    pub fn view(&self, id: GladiatorId) -> GladiatorView {
        GladiatorView {
            id,
            name: self.name.clone(),
            team: self.team,
            stats: self.stats(),
            skills: self.skills(),
            boosts: self.boosts(),
            pos: self.pos(),
            range: self.range(),
            cur_hp: self.cur_hp(),
            max_hp: self.max_hp(),
            cur_sp: self.cur_sp(),
            max_sp: self.max_sp(),
            speed: self.speed(),
            damage_dealt: self.damage_dealt(),
            dead: self.is_dead(),
        }
    }
}

impl Dungeon {
    pub fn view(&self) -> DungeonView {
        DungeonView {
            bounds: self.bounds(),
        }
    }
}

impl Event {
    pub fn view(&self) -> EventView {
        EventView {
            owner: self.owner,
            action: self.action,
            time_stamp: self.time_stamp,
            origin: self.origin,
        }
    }
}
