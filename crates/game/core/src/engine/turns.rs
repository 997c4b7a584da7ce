use crate::action::{self, Move};
use crate::event::Event;
use crate::rules::{EffectContext, EventOutcome};
use crate::state::{GladiatorId, Tick};

use super::{ArenaEngine, EngineError};

/// An event taken off the queue together with what it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutedEvent {
    pub event: Event,
    pub outcome: EventOutcome,
}

/// Result of a submitted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Who moved.
    pub player: GladiatorId,
    /// The event the move was turned into.
    pub scheduled: Event,
    /// Events executed before the next decision was due, in order.
    pub executed: Vec<ExecutedEvent>,
}

impl ArenaEngine {
    /// Submits a move for the current player.
    ///
    /// The move is scheduled at `clock + cost`. If no other gladiator is
    /// waiting for a decision, queued events are then executed until one is.
    pub fn submit_move(&mut self, mv: Move) -> Result<SubmitOutcome, EngineError> {
        if self.is_game_over() {
            return Err(EngineError::GameOver(self.error_context()));
        }
        let player = self
            .awaiting
            .front()
            .copied()
            .ok_or_else(|| EngineError::NoPendingDecision(self.error_context()))?;

        let gladiator = self
            .state
            .gladiator(player)
            .ok_or(EngineError::UnknownGladiator(player))?;

        if self.config.strict_moves {
            let options = self.rules.options.options(&self.state, player);
            if !action::is_offered(&options, &mv) {
                return Err(EngineError::move_not_offered(
                    player,
                    mv.kind(),
                    self.error_context().with_gladiator(player),
                ));
            }
        }

        let cost = gladiator.cost(mv.kind(), mv.value());
        let event = Event::new(player, mv, self.state.clock + cost, gladiator.pos());
        let seq = self.queue.push(event);
        let scheduled = Event { seq, ..event };
        self.awaiting.pop_front();

        let kind: &'static str = mv.kind().into();
        tracing::debug!(
            player = player.index(),
            kind,
            at = scheduled.time_stamp.0,
            "move scheduled"
        );

        let executed = self.advance();
        Ok(SubmitOutcome {
            player,
            scheduled,
            executed,
        })
    }

    /// Executes queued events until a gladiator awaits a decision or the
    /// game ends.
    fn advance(&mut self) -> Vec<ExecutedEvent> {
        let mut executed = Vec::new();
        while self.awaiting.is_empty() && !self.is_game_over() {
            let Some(event) = self.queue.pop() else {
                break;
            };
            if !self.state.gladiator(event.owner).is_some_and(|g| g.is_alive()) {
                tracing::trace!(owner = event.owner.index(), "dropping event of dead owner");
                continue;
            }

            let outcome = self.handle_event(event);
            executed.push(ExecutedEvent { event, outcome });

            if self.state.gladiator(event.owner).is_some_and(|g| g.is_alive()) {
                self.awaiting.push_back(event.owner);
            }
        }
        executed
    }

    /// Executes one event: advances the clock, applies the effect and
    /// resizes the dungeon.
    ///
    /// Illegal-in-simulation events come back as [`EventOutcome::NoEffect`].
    /// Events of gladiators killed by this one are purged from the queue.
    pub fn handle_event(&mut self, event: Event) -> EventOutcome {
        self.state.clock = Tick(self.state.clock.0.max(event.time_stamp.0));

        let ctx = EffectContext {
            dice: &self.dice,
            combat: &self.combat,
        };
        let outcome = self.rules.effects.apply(&event, &mut self.state, &ctx);
        self.state.nonce += 1;

        for id in self.state.ids() {
            if self.state.gladiators[id.index()].is_dead() {
                let purged = self.queue.purge_owner(id);
                if purged > 0 {
                    tracing::debug!(gladiator = id.index(), purged, "gladiator fell");
                }
                self.awaiting.retain(|&waiting| waiting != id);
            }
        }

        self.rules
            .resize
            .resize(&mut self.state.dungeon, &self.state.gladiators);

        match outcome {
            EventOutcome::NoEffect { reason } => tracing::trace!(
                owner = event.owner.index(),
                reason = reason.as_ref(),
                clock = self.state.clock.0,
                "event absorbed"
            ),
            _ => tracing::trace!(
                owner = event.owner.index(),
                clock = self.state.clock.0,
                ?outcome,
                "event executed"
            ),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ArenaConfig, GladiatorSpec};
    use crate::state::Position;

    fn duel() -> ArenaEngine {
        let config = ArenaConfig::new().with_gladiators(vec![
            GladiatorSpec::new("left", 0).at(Position::new(0, 0)),
            GladiatorSpec::new("right", 1).at(Position::new(1, 0)),
        ]);
        ArenaEngine::new(config).unwrap()
    }

    #[test]
    fn everyone_decides_before_time_moves() {
        let mut engine = duel();
        assert_eq!(engine.current_player(), Some(GladiatorId(0)));

        let first = engine.submit_move(Move::Stay).unwrap();
        assert!(first.executed.is_empty());
        assert_eq!(engine.current_player(), Some(GladiatorId(1)));
        assert_eq!(engine.clock(), Tick::ZERO);

        let second = engine.submit_move(Move::Stay).unwrap();
        assert_eq!(second.executed.len(), 1);
        assert_eq!(second.executed[0].event.owner, GladiatorId(0));
        assert_eq!(engine.clock(), first.scheduled.time_stamp);
        assert_eq!(engine.current_player(), Some(GladiatorId(0)));
        assert_eq!(engine.queue().len(), 1);
    }

    #[test]
    fn ties_resolve_in_submission_order() {
        let mut engine = duel();
        engine.submit_move(Move::Stay).unwrap();
        let outcome = engine.submit_move(Move::Stay).unwrap();
        // Equal speed and equal cost: the first submission runs first.
        assert_eq!(outcome.executed[0].event.seq, 0);
    }

    #[test]
    fn strict_mode_rejects_unoffered_moves() {
        let config = ArenaConfig::new()
            .with_gladiators(vec![
                GladiatorSpec::new("left", 0).at(Position::new(0, 0)),
                GladiatorSpec::new("right", 1).at(Position::new(5, 0)),
            ])
            .strict();
        let mut engine = ArenaEngine::new(config).unwrap();
        let err = engine
            .submit_move(Move::Attack {
                target: GladiatorId(1),
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::MoveNotOffered { .. }));
        assert_eq!(engine.current_player(), Some(GladiatorId(0)));
    }

    #[test]
    fn lenient_mode_absorbs_illegal_moves() {
        let config = ArenaConfig::new().with_gladiators(vec![
            GladiatorSpec::new("left", 0).at(Position::new(0, 0)),
            GladiatorSpec::new("right", 1).at(Position::new(5, 0)),
        ]);
        let mut engine = ArenaEngine::new(config).unwrap();
        engine
            .submit_move(Move::Attack {
                target: GladiatorId(1),
            })
            .unwrap();
        let outcome = engine
            .submit_move(Move::Attack {
                target: GladiatorId(0),
            })
            .unwrap();
        assert_eq!(outcome.executed[0].event.owner, GladiatorId(0));
        assert!(matches!(
            outcome.executed[0].outcome,
            EventOutcome::NoEffect { .. }
        ));
    }

    #[test]
    fn moves_after_game_over_are_rejected() {
        let config = ArenaConfig::new()
            .with_gladiators(vec![
                GladiatorSpec::new("left", 0).at(Position::new(0, 0)),
                GladiatorSpec::new("right", 1).at(Position::new(1, 0)),
            ])
            .with_max_events(1);
        let mut engine = ArenaEngine::new(config).unwrap();
        engine.submit_move(Move::Stay).unwrap();
        engine.submit_move(Move::Stay).unwrap();
        assert!(engine.is_game_over());
        assert_eq!(engine.current_player(), None);
        assert!(matches!(
            engine.submit_move(Move::Stay),
            Err(EngineError::GameOver(_))
        ));
    }
}
