use std::str::FromStr;

use crate::config::CustomCell;
use crate::error::ConfigError;
use crate::grid::Coord;

/// Predefined patterns for initializing the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// The 2x2 still-life block with its top-left cell at the anchor
    Block,
    /// A diagonal spaceship
    Glider,
    /// One lone cell
    Single,
    /// Random draws with replacement; `None` seeds from entropy
    Random { seed: Option<u64> },
    /// Caller-supplied cells
    Custom(Vec<CustomCell>),
}

impl Pattern {
    /// Cells of a fixed-shape pattern anchored at `(x, y)`.
    ///
    /// Random and Custom have no fixed shape and return an empty list.
    pub fn cells(&self, x: i32, y: i32) -> Vec<Coord> {
        match self {
            Pattern::Block => vec![
                (x, y), (x+1, y),
                (x, y+1), (x+1, y+1)
            ],
            Pattern::Glider => vec![
                (x+1, y),
                (x+2, y+1),
                (x, y+2), (x+1, y+2), (x+2, y+2)
            ],
            Pattern::Single => vec![(x, y)],
            Pattern::Random { .. } | Pattern::Custom(_) => Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Block => "Block",
            Pattern::Glider => "Glider",
            Pattern::Single => "Single",
            Pattern::Random { .. } => "Random",
            Pattern::Custom(_) => "Custom",
        }
    }
}

/// Accepts the selector names case-insensitively. `Random` and `Custom` parse
/// to their empty forms; the configuration fills in seed and cells.
impl FromStr for Pattern {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Pattern::Block),
            "glider" => Ok(Pattern::Glider),
            "single" | "single cell" => Ok(Pattern::Single),
            "random" => Ok(Pattern::Random { seed: None }),
            "custom" => Ok(Pattern::Custom(Vec::new())),
            _ => Err(ConfigError::UnknownPattern(s.to_string())),
        }
    }
}
