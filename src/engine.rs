//! The automaton engine: a grid, its live-cell set and the stepping loop.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState;
use crate::config::{CustomCell, SimConfig};
use crate::error::ConfigError;
use crate::grid::{Coord, Grid, NEIGHBOR_OFFSETS};
use crate::rules::langton::Ant;
use crate::rules::patterns::Pattern;
use crate::rules::{CellRule, RuleKind};

/// How a generation is computed, fixed when the automaton is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dynamics {
    /// Every cell transitions from its neighborhood; stepped sparsely.
    Cells(CellRule),
    /// One agent walks the grid.
    Ant(Ant),
}

/// A running cellular automaton.
///
/// Owns its [`Grid`] together with the set of live (non-`Dead`) coordinates.
/// All writes go through [`update_cell`](Self::update_cell), which keeps the two
/// in agreement: a coordinate is in the live set iff its grid state is active.
#[derive(Debug, Clone)]
pub struct Automaton {
    name: String,
    rule: RuleKind,
    dynamics: Dynamics,
    grid: Grid,
    live: HashSet<Coord>,
    generations: u64,
    generation: u64,

    // Per-generation scratch space, cleared rather than reallocated.
    tally: HashMap<Coord, u32>,
    next: HashMap<Coord, CellState>,
    vacated: Vec<Coord>,
}

impl Automaton {
    /// Creates an automaton with an all-dead grid and no pattern applied.
    pub fn new(width: u32, height: u32, rule: RuleKind) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }

        let dynamics = match rule.cell_rule() {
            Some(cell_rule) => Dynamics::Cells(cell_rule),
            None => Dynamics::Ant(Ant::new((width / 2) as i32, (height / 2) as i32)),
        };

        Ok(Self {
            name: rule.name(),
            rule,
            dynamics,
            grid: Grid::new(width, height),
            live: HashSet::new(),
            generations: 0,
            generation: 0,
            tally: HashMap::new(),
            next: HashMap::new(),
            vacated: Vec::new(),
        })
    }

    /// Builds an automaton from a configuration record and applies its initial pattern.
    ///
    /// Unknown pattern or rule selectors, an empty grid and custom cells outside
    /// the grid are rejected; on error nothing is constructed.
    pub fn initialize(config: &SimConfig) -> Result<Self, ConfigError> {
        let rule = config.rule_kind()?;
        let pattern = config.pattern_kind()?;

        let mut automaton = Self::new(config.width, config.height, rule)?;
        if !config.name.is_empty() {
            automaton.name = config.name.clone();
        }
        automaton.generations = config.generations;
        automaton.place_pattern(&pattern)?;

        log::info!(
            "Initialized {} ({}) on a {}x{} grid with the {} pattern: {} live cells",
            automaton.name,
            rule.name(),
            config.width,
            config.height,
            pattern.name(),
            automaton.live.len()
        );
        Ok(automaton)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule(&self) -> RuleKind {
        self.rule
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Read-only access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations stepped so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation count the automaton was configured with.
    pub fn configured_generations(&self) -> u64 {
        self.generations
    }

    /// The ant, for Langton's Ant automata.
    pub fn ant(&self) -> Option<&Ant> {
        match &self.dynamics {
            Dynamics::Ant(ant) => Some(ant),
            Dynamics::Cells(_) => None,
        }
    }

    pub fn get_cell(&self, x: i32, y: i32) -> CellState {
        self.grid.get(x, y)
    }

    pub fn get_live_cells(&self) -> &HashSet<Coord> {
        &self.live
    }

    pub fn is_live(&self, x: i32, y: i32) -> bool {
        self.live.contains(&(x, y))
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }

    /// Writes one cell and keeps the live-cell set in step with the grid.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn update_cell(&mut self, x: i32, y: i32, state: CellState) {
        if !self.grid.contains(x, y) {
            return;
        }
        self.grid.set(x, y, state);
        if state.is_active() {
            self.live.insert((x, y));
        } else {
            self.live.remove(&(x, y));
        }
    }

    /// Kills every live cell.
    pub fn clear(&mut self) {
        for (x, y) in std::mem::take(&mut self.live) {
            self.grid.set(x, y, CellState::Dead);
        }
    }

    /// Places a pattern centered at `(width / 2, height / 2)`.
    ///
    /// Custom cells are all checked against the bounds before any is written.
    pub fn place_pattern(&mut self, pattern: &Pattern) -> Result<(), ConfigError> {
        let seed_state = self.rule.seed_state();
        let (cx, cy) = ((self.width() / 2) as i32, (self.height() / 2) as i32);

        match pattern {
            Pattern::Block | Pattern::Glider | Pattern::Single => {
                for (x, y) in pattern.cells(cx, cy) {
                    self.update_cell(x, y, seed_state);
                }
            }
            Pattern::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                self.scatter(&mut rng, seed_state);
            }
            Pattern::Custom(cells) => {
                if let Some(outside) = cells.iter().find(|c| !self.grid.contains(c.x, c.y)) {
                    return Err(ConfigError::CellOutOfBounds {
                        x: outside.x,
                        y: outside.y,
                        width: self.width(),
                        height: self.height(),
                    });
                }
                for &CustomCell { x, y, state } in cells {
                    self.update_cell(x, y, state.unwrap_or(seed_state));
                }
            }
        }
        Ok(())
    }

    /// Draws `k` cells with replacement, `k` uniform in `[0, width * height)`.
    /// Repeated draws land on the same cell, so fewer than `k` may end up live.
    fn scatter<R: Rng>(&mut self, rng: &mut R, state: CellState) {
        let (width, height) = (self.width(), self.height());
        let area = width as u64 * height as u64;
        let draws = rng.gen_range(0..area);
        log::debug!("Random pattern: {} draws over {} cells", draws, area);
        for _ in 0..draws {
            let x = rng.gen_range(0..width) as i32;
            let y = rng.gen_range(0..height) as i32;
            self.update_cell(x, y, state);
        }
    }

    /// Advances exactly one generation and returns the number of live cells.
    pub fn step(&mut self) -> usize {
        match self.dynamics {
            Dynamics::Cells(rule) => self.step_cells(rule),
            Dynamics::Ant(ant) => self.step_ant(ant),
        }
        self.generation += 1;
        log::trace!(
            "{}: generation {} has {} live cells",
            self.name,
            self.generation,
            self.live.len()
        );
        self.live.len()
    }

    /// Calls [`step`](Self::step) `generations` times in order.
    pub fn run(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Runs the generation count given in the configuration.
    pub fn run_configured(&mut self) {
        self.run(self.generations);
    }

    /// One generation of a sparse, neighborhood-counting rule.
    ///
    /// Only live cells and the dead cells they excite are evaluated. The whole
    /// next generation is computed from the current grid before any write.
    fn step_cells(&mut self, rule: CellRule) {
        self.tally.clear();
        self.next.clear();

        for &(x, y) in &self.live {
            let state = self.grid.get(x, y);
            let excites = rule.excites(state);
            let mut excited = 0;
            for (dx, dy) in NEIGHBOR_OFFSETS {
                let (nx, ny) = (x + dx, y + dy);
                let neighbor = self.grid.get(nx, ny);
                if neighbor.is_active() {
                    if rule.excites(neighbor) {
                        excited += 1;
                    }
                } else if excites && self.grid.contains(nx, ny) {
                    *self.tally.entry((nx, ny)).or_insert(0) += 1;
                }
            }

            let next = rule.next_state(state, excited);
            if next.is_active() {
                self.next.insert((x, y), next);
            }
        }

        for (&coord, &count) in &self.tally {
            let born = rule.next_state(CellState::Dead, count);
            if born.is_active() {
                self.next.insert(coord, born);
            }
        }

        let next = std::mem::take(&mut self.next);
        let mut vacated = std::mem::take(&mut self.vacated);
        vacated.clear();
        vacated.extend(self.live.iter().filter(|coord| !next.contains_key(*coord)));

        for &(x, y) in &vacated {
            self.update_cell(x, y, CellState::Dead);
        }
        for (&(x, y), &state) in &next {
            self.update_cell(x, y, state);
        }

        self.next = next;
        self.vacated = vacated;
    }

    /// One move of Langton's Ant. A halted ant leaves the grid untouched.
    fn step_ant(&mut self, mut ant: Ant) {
        if ant.halted {
            return;
        }

        let flipped = ant.turn(self.grid.get(ant.x, ant.y));
        self.update_cell(ant.x, ant.y, flipped);

        let (nx, ny) = ant.ahead();
        if self.grid.contains(nx, ny) {
            ant.x = nx;
            ant.y = ny;
        } else {
            log::debug!("Ant halted at ({}, {}) facing {:?}", ant.x, ant.y, ant.heading);
            ant.halted = true;
        }
        self.dynamics = Dynamics::Ant(ant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::langton::Heading;
    use proptest::prelude::*;

    fn conway(width: u32, height: u32) -> Automaton {
        Automaton::new(width, height, RuleKind::Conway).unwrap()
    }

    #[test]
    fn update_cell_tracks_live_set() {
        let mut life = conway(5, 5);
        life.update_cell(2, 3, CellState::Alive);
        assert_eq!(life.get_cell(2, 3), CellState::Alive);
        assert!(life.is_live(2, 3));

        life.update_cell(2, 3, CellState::Dead);
        assert_eq!(life.get_cell(2, 3), CellState::Dead);
        assert!(life.get_live_cells().is_empty());
    }

    #[test]
    fn update_cell_ignores_out_of_bounds() {
        let mut life = conway(4, 4);
        life.update_cell(-1, 0, CellState::Alive);
        life.update_cell(4, 2, CellState::Alive);
        assert_eq!(life.live_count(), 0);
        assert!(life.grid().cells().iter().all(|c| *c == CellState::Dead));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert_eq!(
            Automaton::new(0, 10, RuleKind::Conway).unwrap_err(),
            ConfigError::EmptyGrid { width: 0, height: 10 }
        );
    }

    #[test]
    fn blinker_oscillates() {
        let mut life = conway(5, 5);
        for x in 1..=3 {
            life.update_cell(x, 2, CellState::Alive);
        }
        assert_eq!(life.step(), 3);
        let vertical: HashSet<Coord> = [(2, 1), (2, 2), (2, 3)].into_iter().collect();
        assert_eq!(life.get_live_cells(), &vertical);
        life.step();
        assert!(life.is_live(1, 2) && life.is_live(3, 2));
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn corner_cells_do_not_wrap() {
        // An L-tromino in the corner completes to a block; nothing appears on
        // the opposite edges.
        let mut life = conway(6, 6);
        life.update_cell(0, 0, CellState::Alive);
        life.update_cell(1, 0, CellState::Alive);
        life.update_cell(0, 1, CellState::Alive);
        life.step();
        let block: HashSet<Coord> = [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().collect();
        assert_eq!(life.get_live_cells(), &block);
    }

    #[test]
    fn clear_kills_everything() {
        let mut life = conway(5, 5);
        life.place_pattern(&Pattern::Glider).unwrap();
        life.clear();
        assert_eq!(life.live_count(), 0);
        assert_eq!(life.render(), ".....\n.....\n.....\n.....\n.....");
    }

    #[test]
    fn custom_pattern_is_all_or_nothing() {
        let mut life = conway(5, 5);
        let cells = vec![CustomCell::new(1, 1), CustomCell::new(5, 1)];
        assert_eq!(
            life.place_pattern(&Pattern::Custom(cells)),
            Err(ConfigError::CellOutOfBounds { x: 5, y: 1, width: 5, height: 5 })
        );
        assert_eq!(life.live_count(), 0);
    }

    #[test]
    fn brians_brain_cells_fire_then_rest() {
        let mut brain = Automaton::new(6, 6, RuleKind::BriansBrain).unwrap();
        brain.update_cell(2, 2, CellState::Alive);
        brain.update_cell(3, 2, CellState::Alive);

        brain.step();
        assert_eq!(brain.get_cell(2, 2), CellState::Dying);
        assert_eq!(brain.get_cell(3, 2), CellState::Dying);
        // Cells above and below the pair touch both firing cells.
        for x in 2..=3 {
            assert_eq!(brain.get_cell(x, 1), CellState::Alive);
            assert_eq!(brain.get_cell(x, 3), CellState::Alive);
        }
        assert_eq!(brain.live_count(), 6);

        brain.step();
        assert_eq!(brain.get_cell(2, 2), CellState::Dead);
        assert!(!brain.is_live(2, 2));
        assert_eq!(brain.get_cell(2, 1), CellState::Dying);
    }

    #[test]
    fn wireworld_electron_travels_along_wire() {
        let mut wires = Automaton::new(8, 3, RuleKind::Wireworld).unwrap();
        for x in 0..8 {
            wires.update_cell(x, 1, CellState::Wire);
        }
        wires.update_cell(1, 1, CellState::ElectronHead);
        wires.update_cell(0, 1, CellState::ElectronTail);

        wires.step();
        assert_eq!(wires.get_cell(2, 1), CellState::ElectronHead);
        assert_eq!(wires.get_cell(1, 1), CellState::ElectronTail);
        assert_eq!(wires.get_cell(0, 1), CellState::Wire);

        wires.run(3);
        assert_eq!(wires.get_cell(5, 1), CellState::ElectronHead);
        assert_eq!(wires.get_cell(4, 1), CellState::ElectronTail);
        // Wire is never consumed.
        assert_eq!(wires.live_count(), 8);
    }

    #[test]
    fn ant_walks_and_flips() {
        let mut ant = Automaton::new(11, 11, RuleKind::LangtonsAnt).unwrap();
        assert_eq!(ant.ant().unwrap().position(), (5, 5));

        ant.step();
        assert_eq!(ant.get_cell(5, 5), CellState::Alive);
        let walker = ant.ant().unwrap();
        assert_eq!(walker.position(), (6, 5));
        assert_eq!(walker.heading, Heading::East);

        // Four white cells in a row trace a square back to the start.
        ant.run(3);
        assert_eq!(ant.ant().unwrap().position(), (5, 5));
        assert_eq!(ant.live_count(), 4);

        // Landing on a black cell turns left and clears it.
        ant.step();
        assert_eq!(ant.get_cell(5, 5), CellState::Dead);
        assert_eq!(ant.ant().unwrap().heading, Heading::West);
        assert_eq!(ant.ant().unwrap().position(), (4, 5));
    }

    #[test]
    fn ant_halts_at_the_edge() {
        let mut ant = Automaton::new(1, 1, RuleKind::LangtonsAnt).unwrap();
        ant.step();
        assert!(ant.ant().unwrap().halted);
        assert_eq!(ant.get_cell(0, 0), CellState::Alive);

        let before = ant.render();
        ant.run(10);
        assert_eq!(ant.render(), before);
        assert_eq!(ant.generation(), 11);
    }

    proptest! {
        #[test]
        fn live_set_matches_grid_after_steps(
            cells in prop::collection::vec((0..12i32, 0..12i32), 0..60),
            rule in prop::sample::select(vec![
                RuleKind::Conway,
                RuleKind::HighLife,
                RuleKind::Majority,
                RuleKind::BriansBrain,
                RuleKind::LangtonsAnt,
            ]),
            steps in 0..8u64,
        ) {
            let mut automaton = Automaton::new(12, 12, rule).unwrap();
            for (x, y) in cells {
                automaton.update_cell(x, y, CellState::Alive);
            }
            automaton.run(steps);

            for y in 0..12 {
                for x in 0..12 {
                    prop_assert_eq!(
                        automaton.get_cell(x, y).is_active(),
                        automaton.is_live(x, y)
                    );
                }
            }
            prop_assert!(automaton
                .get_live_cells()
                .iter()
                .all(|&(x, y)| automaton.grid().contains(x, y)));
        }
    }
}
