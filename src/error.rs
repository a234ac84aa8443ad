//! Configuration errors.

use thiserror::Error;

/// Errors raised while building an automaton from a configuration.
///
/// Stepping never fails once construction succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Initial-pattern selector is not one of Block, Glider, Random, Single or Custom.
    #[error("unknown initial pattern: {0:?}")]
    UnknownPattern(String),

    #[error("unknown automaton rule: {0:?}")]
    UnknownRule(String),

    /// Width or height is zero.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    /// A custom pattern cell lies outside the grid.
    #[error("custom cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Malformed `B.../S...` rule string.
    #[error("invalid life rule {rule:?}: {reason}")]
    InvalidRuleString { rule: String, reason: &'static str },

    #[error("unknown cell state: {0:?}")]
    UnknownCellState(String),

    /// Malformed `X,Y[=STATE]` cell specification.
    #[error("invalid cell coordinate: {0:?}")]
    InvalidCoordinate(String),
}
