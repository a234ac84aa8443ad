//! Per-run configuration record.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::CellState;
use crate::error::ConfigError;
use crate::rules::patterns::Pattern;
use crate::rules::RuleKind;

/// One cell of a custom initial pattern.
///
/// Without an explicit state the automaton's seed state is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCell {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub state: Option<CellState>,
}

impl CustomCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, state: None }
    }

    pub fn with_state(x: i32, y: i32, state: CellState) -> Self {
        Self {
            x,
            y,
            state: Some(state),
        }
    }
}

/// Parses `X,Y` or `X,Y=STATE`, e.g. `4,7` or `4,7=wire`.
impl FromStr for CustomCell {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidCoordinate(s.to_string());
        let (coords, state) = match s.split_once('=') {
            Some((coords, state)) => (coords, Some(state.parse::<CellState>()?)),
            None => (s, None),
        };
        let (x, y) = coords.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse::<i32>().map_err(|_| invalid())?;
        let y = y.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { x, y, state })
    }
}

/// Everything needed to set up one simulation run.
///
/// Pattern and rule are kept as selector strings so that records coming from
/// a driver or a JSON file are validated in one place, by
/// [`Automaton::initialize`](crate::engine::Automaton::initialize).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Display name; empty means the rule's own name.
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Generations to run with [`Automaton::run_configured`](crate::engine::Automaton::run_configured).
    pub generations: u64,
    /// Block, Glider, Random, Single or Custom.
    pub pattern: String,
    pub rule: String,
    /// Cells placed by the Custom pattern.
    pub cells: Vec<CustomCell>,
    /// Seed for the Random pattern; entropy when absent.
    pub seed: Option<u64>,
    /// Pause between generations. Only drivers look at this.
    pub delay_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            width: 50,
            height: 50,
            generations: 100,
            pattern: "Random".to_string(),
            rule: "Conway".to_string(),
            cells: Vec::new(),
            seed: None,
            delay_ms: 100,
        }
    }
}

impl SimConfig {
    /// Reads a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn rule_kind(&self) -> Result<RuleKind, ConfigError> {
        self.rule.parse()
    }

    /// Resolves the pattern selector, attaching the seed and custom cells.
    pub fn pattern_kind(&self) -> Result<Pattern, ConfigError> {
        let pattern = match self.pattern.parse::<Pattern>()? {
            Pattern::Random { .. } => Pattern::Random { seed: self.seed },
            Pattern::Custom(_) => Pattern::Custom(self.cells.clone()),
            fixed => fixed,
        };
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_custom_cells() {
        assert_eq!("3,4".parse::<CustomCell>().unwrap(), CustomCell::new(3, 4));
        assert_eq!(
            " 3 , -1=wire".parse::<CustomCell>().unwrap(),
            CustomCell::with_state(3, -1, CellState::Wire)
        );
        assert!(matches!(
            "3;4".parse::<CustomCell>(),
            Err(ConfigError::InvalidCoordinate(_))
        ));
        assert!(matches!(
            "3,4=goo".parse::<CustomCell>(),
            Err(ConfigError::UnknownCellState(_))
        ));
    }

    #[test]
    fn json_fills_defaults() {
        let config = SimConfig::from_json(
            r#"{
                "rule": "Wireworld",
                "width": 12,
                "pattern": "Custom",
                "cells": [{"x": 1, "y": 2, "state": "electron_head"}, {"x": 2, "y": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 50);
        assert_eq!(config.rule_kind().unwrap(), RuleKind::Wireworld);
        assert_eq!(
            config.pattern_kind().unwrap(),
            Pattern::Custom(vec![
                CustomCell::with_state(1, 2, CellState::ElectronHead),
                CustomCell::new(2, 2),
            ])
        );
    }

    #[test]
    fn random_pattern_takes_seed() {
        let config = SimConfig {
            seed: Some(7),
            ..SimConfig::default()
        };
        assert_eq!(
            config.pattern_kind().unwrap(),
            Pattern::Random { seed: Some(7) }
        );
    }
}
