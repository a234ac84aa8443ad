//! Transition rules for every supported automaton kind.
//!
//! Life-like rules, Brian's Brain and Wireworld share one per-cell transition
//! shape ([`CellRule`]) and are stepped by the engine's sparse live-cell scan.
//! Langton's Ant moves an agent instead and lives in [`langton`].

pub mod langton;
pub mod patterns;
pub mod presets;

use std::fmt;
use std::str::FromStr;

use crate::cell::CellState;
use crate::error::ConfigError;

/// Birth/survival rule of a Life-like automaton, e.g. Conway's B3/S23.
///
/// Bit `n` of each mask is set when `n` live neighbors trigger birth (or allow
/// survival). Presets live in [`presets`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifeRules {
    birth: u16,
    survival: u16,
}

impl Default for LifeRules {
    fn default() -> Self {
        // Classic Conway's Game of Life rules
        Self::conway()
    }
}

impl LifeRules {
    /// Create a rule set from birth and survival neighbor counts.
    ///
    /// Counts must be in `0..=8`. Birth on zero neighbors is rejected: it would
    /// make every isolated dead cell a candidate, which the sparse stepper never visits.
    pub fn new(birth: &[u32], survival: &[u32]) -> Result<Self, ConfigError> {
        let describe = || format!("B{}/S{}", digits(birth), digits(survival));
        if birth.iter().chain(survival).any(|&n| n > 8) {
            return Err(ConfigError::InvalidRuleString {
                rule: describe(),
                reason: "neighbor counts must be between 0 and 8",
            });
        }
        if birth.contains(&0) {
            return Err(ConfigError::InvalidRuleString {
                rule: describe(),
                reason: "birth on 0 neighbors is not supported",
            });
        }
        Ok(Self {
            birth: mask(birth),
            survival: mask(survival),
        })
    }

    pub(crate) const fn from_masks(birth: u16, survival: u16) -> Self {
        Self { birth, survival }
    }

    /// Whether a dead cell with `neighbors` live neighbors is born.
    pub fn births_on(&self, neighbors: u32) -> bool {
        neighbors <= 8 && self.birth & (1 << neighbors) != 0
    }

    /// Whether a live cell with `neighbors` live neighbors survives.
    pub fn survives_on(&self, neighbors: u32) -> bool {
        neighbors <= 8 && self.survival & (1 << neighbors) != 0
    }
}

fn mask(counts: &[u32]) -> u16 {
    counts.iter().fold(0, |acc, &n| acc | (1 << n))
}

fn digits(counts: &[u32]) -> String {
    counts.iter().map(|n| n.to_string()).collect()
}

fn mask_digits(mask: u16) -> String {
    (0..=8u32)
        .filter(|n| mask & (1 << n) != 0)
        .map(|n| n.to_string())
        .collect()
}

impl fmt::Display for LifeRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}/S{}",
            mask_digits(self.birth),
            mask_digits(self.survival)
        )
    }
}

/// Parses `B3/S23` style notation. The halves may appear in either order and
/// letters are case-insensitive.
impl FromStr for LifeRules {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigError::InvalidRuleString {
            rule: s.to_string(),
            reason,
        };

        let mut birth = None;
        let mut survival = None;
        for part in s.trim().split('/') {
            let mut chars = part.trim().chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(invalid("expected halves starting with B and S")),
            };
            if slot.is_some() {
                return Err(invalid("B or S given twice"));
            }
            let counts = chars
                .map(|c| c.to_digit(10).ok_or_else(|| invalid("counts must be digits")))
                .collect::<Result<Vec<u32>, _>>()?;
            *slot = Some(counts);
        }

        match (birth, survival) {
            (Some(birth), Some(survival)) => Self::new(&birth, &survival),
            _ => Err(invalid("both B and S halves are required")),
        }
    }
}

/// Per-cell transition shared by the sparse-stepped automata.
///
/// Each variant decides which state *excites* its neighbors (is counted by
/// them) and maps `(current state, excited neighbor count)` to the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRule {
    Life(LifeRules),
    BriansBrain,
    Wireworld,
}

impl CellRule {
    /// Whether a cell in `state` counts as an excited neighbor.
    pub fn excites(&self, state: CellState) -> bool {
        match self {
            CellRule::Life(_) | CellRule::BriansBrain => state == CellState::Alive,
            CellRule::Wireworld => state == CellState::ElectronHead,
        }
    }

    /// State written by the built-in initial patterns.
    pub fn seed_state(&self) -> CellState {
        match self {
            CellRule::Life(_) | CellRule::BriansBrain => CellState::Alive,
            CellRule::Wireworld => CellState::ElectronHead,
        }
    }

    /// Next state of a cell given its current state and excited neighbor count.
    pub fn next_state(&self, state: CellState, excited: u32) -> CellState {
        match self {
            CellRule::Life(rules) => {
                let alive = match state {
                    CellState::Alive => rules.survives_on(excited),
                    CellState::Dead => rules.births_on(excited),
                    _ => false,
                };
                if alive {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            }
            CellRule::BriansBrain => match state {
                CellState::Alive => CellState::Dying,
                CellState::Dead if excited == 2 => CellState::Alive,
                _ => CellState::Dead,
            },
            CellRule::Wireworld => match state {
                CellState::ElectronHead => CellState::ElectronTail,
                CellState::ElectronTail => CellState::Wire,
                CellState::Wire if excited == 1 || excited == 2 => CellState::ElectronHead,
                CellState::Wire => CellState::Wire,
                _ => CellState::Dead,
            },
        }
    }
}

/// Automaton kind selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Conway,
    HighLife,
    DayAndNight,
    /// A cell takes the majority state of its 3x3 neighborhood, itself included.
    Majority,
    /// Any other Life-like rule given in `B.../S...` notation.
    Life(LifeRules),
    BriansBrain,
    Wireworld,
    LangtonsAnt,
}

impl RuleKind {
    /// Human-readable name of the automaton.
    pub fn name(&self) -> String {
        match self {
            RuleKind::Conway => "Conway's Game of Life".to_string(),
            RuleKind::HighLife => "HighLife".to_string(),
            RuleKind::DayAndNight => "Day & Night".to_string(),
            RuleKind::Majority => "Majority rule".to_string(),
            RuleKind::Life(rules) => format!("Life-like {}", rules),
            RuleKind::BriansBrain => "Brian's Brain".to_string(),
            RuleKind::Wireworld => "Wireworld".to_string(),
            RuleKind::LangtonsAnt => "Langton's Ant".to_string(),
        }
    }

    /// The per-cell rule, or `None` for Langton's Ant which moves an agent instead.
    pub fn cell_rule(&self) -> Option<CellRule> {
        match *self {
            RuleKind::Conway => Some(CellRule::Life(LifeRules::conway())),
            RuleKind::HighLife => Some(CellRule::Life(LifeRules::high_life())),
            RuleKind::DayAndNight => Some(CellRule::Life(LifeRules::day_and_night())),
            RuleKind::Majority => Some(CellRule::Life(LifeRules::majority())),
            RuleKind::Life(rules) => Some(CellRule::Life(rules)),
            RuleKind::BriansBrain => Some(CellRule::BriansBrain),
            RuleKind::Wireworld => Some(CellRule::Wireworld),
            RuleKind::LangtonsAnt => None,
        }
    }

    /// State written by the built-in initial patterns.
    pub fn seed_state(&self) -> CellState {
        self.cell_rule()
            .map(|rule| rule.seed_state())
            .unwrap_or(CellState::Alive)
    }
}

/// Accepts the display names ("Conway's Game of Life", "Majority rule CA", ...),
/// short names ("conway", "wireworld", "ant", ...) and `B.../S...` rule strings.
impl FromStr for RuleKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        let kind = match key.as_str() {
            "conway" | "conways" | "life" | "gameoflife" | "conwaysgameoflife" => RuleKind::Conway,
            "highlife" => RuleKind::HighLife,
            "daynight" | "dayandnight" => RuleKind::DayAndNight,
            "majority" | "majorityrule" | "majorityruleca" | "vote" => RuleKind::Majority,
            "briansbrain" | "brain" => RuleKind::BriansBrain,
            "wireworld" => RuleKind::Wireworld,
            "langtonsant" | "langton" | "ant" => RuleKind::LangtonsAnt,
            _ if s.contains('/') => RuleKind::Life(s.parse()?),
            _ => return Err(ConfigError::UnknownRule(s.to_string())),
        };
        Ok(kind)
    }
}
