//! Langton's Ant: a single agent walking over a two-color grid.
//!
//! On a white (dead) cell the ant turns right, on a black (alive) cell it
//! turns left. It then flips the color of the cell it stands on and moves
//! forward one cell. The grid does not wrap: an ant that would step off the
//! edge halts where it is.

use crate::cell::CellState;
use crate::grid::Coord;

/// Compass heading of the ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Up, -Y.
    North,
    /// Right, +X.
    East,
    /// Down, +Y.
    South,
    /// Left, -X.
    West,
}

impl Heading {
    /// Counter-clockwise quarter turn.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    /// Clockwise quarter turn.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn offset(self) -> Coord {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// Position and heading of the ant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ant {
    pub x: i32,
    pub y: i32,
    pub heading: Heading,
    /// Set once the ant has tried to walk off the grid; a halted ant never moves again.
    pub halted: bool,
}

impl Ant {
    /// An ant at `(x, y)` facing north.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            heading: Heading::North,
            halted: false,
        }
    }

    pub fn position(&self) -> Coord {
        (self.x, self.y)
    }

    /// Turns according to the color underneath and returns the flipped color
    /// to write back to the current cell.
    ///
    /// The color read is the one under the ant, not the one ahead of it, as in
    /// the classic RL ant.
    pub fn turn(&mut self, under: CellState) -> CellState {
        if under.is_active() {
            self.heading = self.heading.turn_left();
            CellState::Dead
        } else {
            self.heading = self.heading.turn_right();
            CellState::Alive
        }
    }

    /// Cell one step ahead in the current heading.
    pub fn ahead(&self) -> Coord {
        let (dx, dy) = self.heading.offset();
        (self.x + dx, self.y + dy)
    }
}
