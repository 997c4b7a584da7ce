//! Positional rules: gladiators step on a grid and attacks are range-gated.

use strum::IntoEnumIterator;

use super::{EffectContext, EffectRule, EventOutcome, NoEffectReason, OptionRule};
use crate::action::{Move, MoveOption};
use crate::combat::AttackRolls;
use crate::event::Event;
use crate::gladiator::{Gladiator, Skill};
use crate::rng::RollPurpose;
use crate::state::{ArenaState, Direction, GladiatorId};

/// Offers stay, in-bounds steps, in-range attacks and skill focus.
#[derive(Clone, Copy, Debug)]
pub struct PositionalOptions {
    /// Largest boost offered in a single focus move.
    pub max_focus: u32,
}

impl Default for PositionalOptions {
    fn default() -> Self {
        Self { max_focus: 2 }
    }
}

impl OptionRule for PositionalOptions {
    fn options(&self, state: &ArenaState, id: GladiatorId) -> Vec<MoveOption> {
        let Some(gladiator) = state.gladiator(id).filter(|g| g.is_alive()) else {
            return Vec::new();
        };

        let mut options = vec![MoveOption::Stay];

        let steps: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&dir| {
                let destination = gladiator.pos() + dir;
                state.dungeon.within_bounds(destination) && !state.is_occupied(destination)
            })
            .collect();
        if !steps.is_empty() {
            options.push(MoveOption::Step { targets: steps });
        }

        let targets: Vec<GladiatorId> = state
            .ids()
            .filter(|&other| other != id)
            .filter(|&other| {
                state
                    .gladiator(other)
                    .is_some_and(|g| g.is_alive() && gladiator.reaches(g.pos()))
            })
            .collect();
        if !targets.is_empty() {
            options.push(MoveOption::Attack { targets });
        }

        // One focus option per distinct amount list, so no skill is offered
        // more than it can still take.
        let mut focus: Vec<(u32, Vec<Skill>)> = Vec::new();
        for skill in Skill::iter() {
            let cap = self.max_focus.min(gladiator.boost_headroom(skill));
            if cap == 0 {
                continue;
            }
            match focus.iter_mut().find(|(c, _)| *c == cap) {
                Some((_, skills)) => skills.push(skill),
                None => focus.push((cap, vec![skill])),
            }
        }
        for (cap, targets) in focus {
            options.push(MoveOption::Focus {
                targets,
                values: (1..=cap).collect(),
            });
        }

        options
    }
}

/// Executes stay, step, attack and focus events.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalEffects;

impl PositionalEffects {
    fn attack(
        &self,
        event: &Event,
        target: GladiatorId,
        state: &mut ArenaState,
        ctx: &EffectContext,
    ) -> EventOutcome {
        if target == event.owner {
            return EventOutcome::no_effect(NoEffectReason::SelfTarget);
        }
        let nonce = state.nonce;
        let Some((attacker, defender)) = state.pair_mut(event.owner, target) else {
            return EventOutcome::no_effect(NoEffectReason::UnknownTarget);
        };
        if defender.is_dead() {
            return EventOutcome::no_effect(NoEffectReason::TargetDead);
        }
        if !attacker.reaches(defender.pos()) {
            return EventOutcome::no_effect(NoEffectReason::OutOfRange);
        }

        let owner = event.owner.index();
        let rolls = AttackRolls {
            hit: ctx.dice.d100(nonce, owner, RollPurpose::Hit),
            variance: ctx.dice.range(
                nonce,
                owner,
                RollPurpose::DamageVariance,
                0,
                ctx.combat.variance_max,
            ),
        };
        let result = attacker.attack(defender, rolls, ctx.combat);
        EventOutcome::Attacked { target, result }
    }

    fn step(&self, event: &Event, direction: Direction, state: &mut ArenaState) -> EventOutcome {
        let Some(from) = state.gladiator(event.owner).map(Gladiator::pos) else {
            return EventOutcome::no_effect(NoEffectReason::UnknownTarget);
        };
        let to = from + direction;
        if !state.dungeon.within_bounds(to) {
            return EventOutcome::no_effect(NoEffectReason::OutOfBounds);
        }
        if state.is_occupied(to) {
            return EventOutcome::no_effect(NoEffectReason::Occupied);
        }
        if let Some(gladiator) = state.gladiator_mut(event.owner) {
            gladiator.step(direction);
        }
        EventOutcome::Moved { from, to }
    }
}

impl EffectRule for PositionalEffects {
    fn apply(&self, event: &Event, state: &mut ArenaState, ctx: &EffectContext) -> EventOutcome {
        if !state.gladiator(event.owner).is_some_and(Gladiator::is_alive) {
            return EventOutcome::no_effect(NoEffectReason::OwnerDead);
        }

        match event.action {
            Move::Stay => {
                if let Some(gladiator) = state.gladiator_mut(event.owner) {
                    gladiator.rest();
                }
                EventOutcome::Stayed
            }
            Move::Step { target } => self.step(event, target, state),
            Move::Attack { target } => self.attack(event, target, state, ctx),
            Move::Focus { target, value } => {
                let applied = state
                    .gladiator_mut(event.owner)
                    .map(|g| g.boost(target, value))
                    .unwrap_or(0);
                if applied == 0 {
                    EventOutcome::no_effect(NoEffectReason::BoostCapped)
                } else {
                    EventOutcome::Focused {
                        skill: target,
                        applied,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::MoveKind;
    use crate::combat::CombatParams;
    use crate::dungeon::{Bounds, Dungeon};
    use crate::gladiator::{BaseSkills, BaseStats};
    use crate::rng::Dice;
    use crate::state::{Position, Tick};

    fn gladiator(x: i32, y: i32) -> Gladiator {
        Gladiator::new("g", 0, BaseStats::default(), BaseSkills::default(), Position::new(x, y))
    }

    fn state(gladiators: Vec<Gladiator>, min: (i32, i32), max: (i32, i32)) -> ArenaState {
        ArenaState::new(
            gladiators,
            Dungeon::new(Bounds::new(
                Position::new(min.0, min.1),
                Position::new(max.0, max.1),
            )),
        )
    }

    fn kinds(options: &[MoveOption]) -> Vec<MoveKind> {
        options.iter().map(MoveOption::kind).collect()
    }

    #[test]
    fn steps_stay_inside_bounds() {
        let s = state(vec![gladiator(0, 0), gladiator(5, 5)], (0, 0), (5, 5));
        let options = PositionalOptions::default().options(&s, GladiatorId(0));
        let steps = options
            .iter()
            .find_map(|o| match o {
                MoveOption::Step { targets } => Some(targets.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(steps.len(), 3);
        assert!(steps.contains(&Direction::East));
        assert!(steps.contains(&Direction::North));
        assert!(steps.contains(&Direction::NorthEast));
    }

    #[test]
    fn boxed_in_gladiator_gets_no_move_option() {
        // 1x2 dungeon, both cells occupied.
        let s = state(vec![gladiator(0, 0), gladiator(1, 0)], (0, 0), (1, 0));
        let options = PositionalOptions::default().options(&s, GladiatorId(0));
        assert!(!kinds(&options).contains(&MoveKind::Move));
        assert!(kinds(&options).contains(&MoveKind::Attack));
    }

    #[test]
    fn no_attack_option_without_targets_in_range() {
        let s = state(vec![gladiator(0, 0), gladiator(3, 0)], (0, 0), (3, 0));
        let options = PositionalOptions::default().options(&s, GladiatorId(0));
        assert!(!kinds(&options).contains(&MoveKind::Attack));
        assert_eq!(options[0], MoveOption::Stay);
    }

    #[test]
    fn dead_gladiators_are_not_targets() {
        let s = state(
            vec![gladiator(0, 0), gladiator(1, 0).with_resources(0, 0)],
            (0, 0),
            (1, 0),
        );
        let options = PositionalOptions::default().options(&s, GladiatorId(0));
        assert!(!kinds(&options).contains(&MoveKind::Attack));
        assert!(
            PositionalOptions::default()
                .options(&s, GladiatorId(1))
                .is_empty()
        );
    }

    #[test]
    fn step_into_occupied_cell_is_absorbed() {
        let mut s = state(vec![gladiator(0, 0), gladiator(1, 0)], (0, 0), (1, 0));
        let event = Event::new(
            GladiatorId(0),
            Move::Step {
                target: Direction::East,
            },
            Tick(10),
            Position::ORIGIN,
        );
        let dice = Dice::new(1);
        let ctx = EffectContext {
            dice: &dice,
            combat: &CombatParams::default(),
        };
        let outcome = PositionalEffects.apply(&event, &mut s, &ctx);
        assert_eq!(outcome, EventOutcome::no_effect(NoEffectReason::Occupied));
        assert_eq!(s.gladiators[0].pos(), Position::ORIGIN);
    }

    #[test]
    fn attack_on_missing_target_is_absorbed() {
        let mut s = state(vec![gladiator(0, 0), gladiator(1, 0)], (0, 0), (1, 0));
        let event = Event::new(
            GladiatorId(0),
            Move::Attack {
                target: GladiatorId(9),
            },
            Tick(10),
            Position::ORIGIN,
        );
        let dice = Dice::new(1);
        let ctx = EffectContext {
            dice: &dice,
            combat: &CombatParams::default(),
        };
        let outcome = PositionalEffects.apply(&event, &mut s, &ctx);
        assert_eq!(
            outcome,
            EventOutcome::no_effect(NoEffectReason::UnknownTarget)
        );
    }

    #[test]
    fn focus_options_shrink_with_headroom() {
        let mut g = gladiator(0, 0);
        for skill in Skill::iter() {
            g.boost(skill, 2);
        }
        let s = state(vec![g, gladiator(4, 4)], (0, 0), (4, 4));
        let options = PositionalOptions::default().options(&s, GladiatorId(0));
        let focus = options
            .iter()
            .find(|o| o.kind() == MoveKind::Focus)
            .unwrap();
        assert_eq!(
            focus,
            &MoveOption::Focus {
                targets: vec![Skill::Accuracy, Skill::Evasion, Skill::Speed],
                values: vec![1],
            }
        );
    }

    #[test]
    fn focus_amounts_follow_each_skills_own_headroom() {
        let mut g = gladiator(0, 0);
        g.boost(Skill::Accuracy, 2);
        let s = state(vec![g, gladiator(4, 4)], (0, 0), (4, 4));
        let options = PositionalOptions::default().options(&s, GladiatorId(0));

        let focus: Vec<&MoveOption> = options
            .iter()
            .filter(|o| o.kind() == MoveKind::Focus)
            .collect();
        assert_eq!(focus.len(), 2);
        assert!(focus.contains(&&MoveOption::Focus {
            targets: vec![Skill::Evasion, Skill::Speed],
            values: vec![1, 2],
        }));
        assert!(focus.contains(&&MoveOption::Focus {
            targets: vec![Skill::Accuracy],
            values: vec![1],
        }));

        let accuracy_two = Move::Focus {
            target: Skill::Accuracy,
            value: 2,
        };
        assert!(!crate::action::is_offered(&options, &accuracy_two));
        assert!(crate::action::is_offered(
            &options,
            &Move::Focus {
                target: Skill::Speed,
                value: 2,
            }
        ));
    }
}
