//! Cell states shared by every automaton kind.

use std::fmt;
use std::str::FromStr;

use bytemuck::NoUninit;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// State of a single cell.
///
/// One enum covers every supported automaton so the same [`Grid`](crate::grid::Grid)
/// can back all of them. `Dead` is the quiescent default: Wireworld's "empty" and
/// Langton's "white" cells are `Dead` too.
#[repr(u8)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, NoUninit, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Dead = 0,
    /// Alive (Life-like rules), firing (Brian's Brain) or black (Langton's Ant).
    Alive = 1,
    /// Refractory state of Brian's Brain.
    Dying = 2,
    /// Wireworld conductor.
    Wire = 3,
    ElectronHead = 4,
    ElectronTail = 5,
}

impl CellState {
    /// Every state other than `Dead` is tracked in the engine's live-cell set.
    pub fn is_active(self) -> bool {
        self != CellState::Dead
    }

    /// Character used by text snapshots.
    pub fn symbol(self) -> char {
        match self {
            CellState::Dead => '.',
            CellState::Alive => '#',
            CellState::Dying => '+',
            CellState::Wire => '=',
            CellState::ElectronHead => '@',
            CellState::ElectronTail => '~',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for CellState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "dead" | "empty" | "white" => Ok(CellState::Dead),
            "alive" | "firing" | "black" => Ok(CellState::Alive),
            "dying" => Ok(CellState::Dying),
            "wire" | "conductor" => Ok(CellState::Wire),
            "head" | "electron_head" => Ok(CellState::ElectronHead),
            "tail" | "electron_tail" => Ok(CellState::ElectronTail),
            _ => Err(ConfigError::UnknownCellState(s.to_string())),
        }
    }
}
