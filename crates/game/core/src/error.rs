//! Common error infrastructure for arena-core.
//!
//! Only contract violations are errors. Conditions that are merely illegal
//! inside the simulation (attacking a corpse, stepping into a wall) are
//! absorbed by the rules as no-effect outcomes and never reach this module.

use crate::state::{GladiatorId, Tick};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller can retry with a different input.
    ///
    /// Examples: move not among the offered options
    Recoverable,

    /// Invalid input that must not be retried unchanged.
    ///
    /// Examples: unknown gladiator index, invalid configuration
    Validation,

    /// The caller drove the engine out of sequence.
    ///
    /// Examples: submitting a move after the game ended
    Internal,

    /// Engine state can no longer be trusted.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Where in the game an error was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    pub gladiator: Option<GladiatorId>,
    pub clock: Tick,
    /// Events executed before the error.
    pub nonce: u64,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(clock: Tick, nonce: u64) -> Self {
        Self {
            gladiator: None,
            clock,
            nonce,
        }
    }

    #[must_use]
    pub const fn with_gladiator(mut self, gladiator: GladiatorId) -> Self {
        self.gladiator = Some(gladiator);
        self
    }
}

/// Common trait for all arena-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
