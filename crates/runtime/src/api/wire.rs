//! JSON wire form of moves.
//!
//! Moves are internally tagged by `"type"`:
//!
//! ```text
//! {"type": "stay"}
//! {"type": "move", "target": "north_east"}
//! {"type": "attack", "target": 1}
//! {"type": "focus", "target": "accuracy", "value": 2}
//! ```

use arena_core::Move;

use super::errors::{Result, RuntimeError};

/// Decodes a move, reporting missing keys and unknown types as
/// [`RuntimeError::MalformedMove`].
pub fn parse_move(value: serde_json::Value) -> Result<Move> {
    serde_json::from_value(value).map_err(|err| RuntimeError::MalformedMove(err.to_string()))
}

pub fn move_to_json(mv: &Move) -> Result<serde_json::Value> {
    serde_json::to_value(mv).map_err(|err| RuntimeError::MalformedMove(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Direction, GladiatorId, Skill};
    use serde_json::json;

    #[test]
    fn parses_every_kind() {
        assert_eq!(parse_move(json!({"type": "stay"})).unwrap(), Move::Stay);
        assert_eq!(
            parse_move(json!({"type": "move", "target": "north_east"})).unwrap(),
            Move::Step {
                target: Direction::NorthEast
            }
        );
        assert_eq!(
            parse_move(json!({"type": "attack", "target": 1})).unwrap(),
            Move::Attack {
                target: GladiatorId(1)
            }
        );
        assert_eq!(
            parse_move(json!({"type": "focus", "target": "speed", "value": 2})).unwrap(),
            Move::Focus {
                target: Skill::Speed,
                value: 2
            }
        );
    }

    #[test]
    fn rejects_malformed_moves() {
        for bad in [
            json!({"type": "attack"}),
            json!({"type": "teleport", "target": 1}),
            json!({"target": 1}),
            json!("stay"),
        ] {
            assert!(matches!(
                parse_move(bad),
                Err(RuntimeError::MalformedMove(_))
            ));
        }
    }

    #[test]
    fn encodes_back_to_the_same_shape() {
        let mv = Move::Attack {
            target: GladiatorId(3),
        };
        assert_eq!(
            move_to_json(&mv).unwrap(),
            json!({"type": "attack", "target": 3})
        );
    }
}
