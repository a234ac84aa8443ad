//! Discrete cellular automata on a fixed rectangular grid.
//!
//! Conway's Game of Life and other Life-like rules, Brian's Brain, Wireworld,
//! the Majority rule and Langton's Ant, all driven through [`Automaton`]:
//!
//! ```
//! use cellsim::{Automaton, SimConfig};
//!
//! let config = SimConfig {
//!     width: 20,
//!     height: 20,
//!     pattern: "Glider".to_string(),
//!     rule: "Conway".to_string(),
//!     ..SimConfig::default()
//! };
//! let mut life = Automaton::initialize(&config).unwrap();
//! life.run(4);
//! assert_eq!(life.live_count(), 5);
//! println!("{}", life.render());
//! ```

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rules;

pub use cell::CellState;
pub use config::{CustomCell, SimConfig};
pub use engine::Automaton;
pub use error::ConfigError;
pub use grid::{Coord, Grid};
pub use rules::langton::{Ant, Heading};
pub use rules::patterns::Pattern;
pub use rules::{CellRule, LifeRules, RuleKind};
