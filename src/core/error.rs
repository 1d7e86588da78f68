//! Engine error type.
//!
//! Every fallible engine operation returns `Result<T, EngineError>`.

use derive_more::{Display, Error};

use super::player::PlayerId;
use super::Position;

/// Errors produced by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A roll outside `1..=6` was passed to the resolver.
    #[display("invalid roll {roll}: must be between 1 and 6")]
    InvalidRoll {
        /// The offending roll.
        roll: u32,
    },

    /// A position outside `1..=board_size`.
    #[display("invalid position {position}: board has tiles 1 to {board_size}")]
    InvalidPosition {
        /// The offending position.
        position: Position,
        /// Size of the board the position was checked against.
        board_size: Position,
    },

    /// Board parameters or a hand-built tile mapping break the board rules.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong.
        reason: String,
    },

    /// Special tile placement ran out of attempts.
    #[display(
        "special tile generation failed after {attempts} attempts \
         ({ladders_placed} ladders, {chutes_placed} chutes placed)"
    )]
    GenerationFailed {
        /// Draws made before giving up.
        attempts: u32,
        /// Ladders placed before giving up.
        ladders_placed: usize,
        /// Chutes placed before giving up.
        chutes_placed: usize,
    },

    /// A turn was requested after the game ended.
    #[display("game is over: {winner} already won")]
    GameOver {
        /// The player who reached the finish.
        winner: PlayerId,
    },
}

impl EngineError {
    /// Shorthand for [`EngineError::InvalidConfiguration`].
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::InvalidRoll { roll: 7 }.to_string(),
            "invalid roll 7: must be between 1 and 6"
        );
        assert_eq!(
            EngineError::InvalidPosition {
                position: 0,
                board_size: 100
            }
            .to_string(),
            "invalid position 0: board has tiles 1 to 100"
        );
        assert_eq!(
            EngineError::invalid_configuration("rows * cols must equal board_size").to_string(),
            "invalid configuration: rows * cols must equal board_size"
        );
        assert_eq!(
            EngineError::GameOver {
                winner: PlayerId::new(1)
            }
            .to_string(),
            "game is over: Player 1 already won"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EngineError::GenerationFailed {
            attempts: 10,
            ladders_placed: 1,
            chutes_placed: 0,
        });
    }
}
