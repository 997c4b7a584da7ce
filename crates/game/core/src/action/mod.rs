//! Moves submitted by agents and the options they are offered.
//!
//! Both are closed sum types: each kind carries exactly the fields it needs.
//! With the `serde` feature the wire form is tagged by `"type"`, e.g.
//! `{"type": "attack", "target": 1}` or `{"type": "move", "target": "north"}`.

use crate::gladiator::Skill;
use crate::state::{Direction, GladiatorId};

/// Kind of action, without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::AsRefStr, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MoveKind {
    Stay,
    Move,
    Attack,
    Focus,
}

/// A move chosen by an agent. Becomes the action of a scheduled event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Move {
    /// Hold position and recover stamina.
    Stay,
    /// Step one tile in a direction.
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    Step { target: Direction },
    /// Attack another gladiator.
    Attack { target: GladiatorId },
    /// Train a skill, boosting it by `value`.
    Focus { target: Skill, value: u32 },
}

impl Move {
    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Stay => MoveKind::Stay,
            Move::Step { .. } => MoveKind::Move,
            Move::Attack { .. } => MoveKind::Attack,
            Move::Focus { .. } => MoveKind::Focus,
        }
    }

    /// Magnitude used for cost calculation.
    pub fn value(&self) -> u32 {
        match self {
            Move::Focus { value, .. } => *value,
            _ => 0,
        }
    }
}

/// One offered move type together with its legal targets.
///
/// Options with targets are never offered with an empty target list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum MoveOption {
    Stay,
    #[cfg_attr(feature = "serde", serde(rename = "move"))]
    Step { targets: Vec<Direction> },
    Attack { targets: Vec<GladiatorId> },
    Focus { targets: Vec<Skill>, values: Vec<u32> },
}

impl MoveOption {
    pub fn kind(&self) -> MoveKind {
        match self {
            MoveOption::Stay => MoveKind::Stay,
            MoveOption::Step { .. } => MoveKind::Move,
            MoveOption::Attack { .. } => MoveKind::Attack,
            MoveOption::Focus { .. } => MoveKind::Focus,
        }
    }

    /// `true` if `mv` is one of the concrete moves this option allows.
    pub fn allows(&self, mv: &Move) -> bool {
        match (self, mv) {
            (MoveOption::Stay, Move::Stay) => true,
            (MoveOption::Step { targets }, Move::Step { target }) => targets.contains(target),
            (MoveOption::Attack { targets }, Move::Attack { target }) => targets.contains(target),
            (MoveOption::Focus { targets, values }, Move::Focus { target, value }) => {
                targets.contains(target) && values.contains(value)
            }
            _ => false,
        }
    }

    /// Every concrete move this option allows, in offer order.
    pub fn expand(&self) -> Vec<Move> {
        match self {
            MoveOption::Stay => vec![Move::Stay],
            MoveOption::Step { targets } => targets
                .iter()
                .map(|&target| Move::Step { target })
                .collect(),
            MoveOption::Attack { targets } => targets
                .iter()
                .map(|&target| Move::Attack { target })
                .collect(),
            MoveOption::Focus { targets, values } => targets
                .iter()
                .flat_map(|&target| values.iter().map(move |&value| Move::Focus { target, value }))
                .collect(),
        }
    }
}

/// `true` if any option in `options` allows `mv`.
pub fn is_offered(options: &[MoveOption], mv: &Move) -> bool {
    options.iter().any(|option| option.allows(mv))
}
