//! Contract violations raised by the engine.

use crate::action::MoveKind;
use crate::error::{ErrorContext, ErrorSeverity, GameError};
use crate::state::GladiatorId;

/// Errors surfaced to the caller of [`super::ArenaEngine`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("game is over; no further moves are accepted (clock {})", .0.clock)]
    GameOver(ErrorContext),

    #[error("no gladiator is awaiting a move")]
    NoPendingDecision(ErrorContext),

    #[error("unknown gladiator {0}")]
    UnknownGladiator(GladiatorId),

    #[error("{kind} move for gladiator {player} was not among the offered options")]
    MoveNotOffered {
        player: GladiatorId,
        kind: &'static str,
        context: ErrorContext,
    },
}

impl EngineError {
    pub(crate) fn move_not_offered(player: GladiatorId, kind: MoveKind, context: ErrorContext) -> Self {
        EngineError::MoveNotOffered {
            player,
            kind: kind.into(),
            context,
        }
    }
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::MoveNotOffered { .. } => ErrorSeverity::Recoverable,
            EngineError::InvalidConfig(_) | EngineError::UnknownGladiator(_) => {
                ErrorSeverity::Validation
            }
            EngineError::GameOver(_) | EngineError::NoPendingDecision(_) => {
                ErrorSeverity::Internal
            }
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            EngineError::GameOver(context)
            | EngineError::NoPendingDecision(context)
            | EngineError::MoveNotOffered { context, .. } => Some(context),
            EngineError::InvalidConfig(_) | EngineError::UnknownGladiator(_) => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidConfig(_) => "ENGINE_INVALID_CONFIG",
            EngineError::GameOver(_) => "ENGINE_GAME_OVER",
            EngineError::NoPendingDecision(_) => "ENGINE_NO_PENDING_DECISION",
            EngineError::UnknownGladiator(_) => "ENGINE_UNKNOWN_GLADIATOR",
            EngineError::MoveNotOffered { .. } => "ENGINE_MOVE_NOT_OFFERED",
        }
    }
}
