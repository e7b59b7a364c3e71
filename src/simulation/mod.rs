mod frame_loop;
mod stroke;

pub use frame_loop::{CancelToken, Frame, FrameLoop};
pub use stroke::{pixel_to_cell, PaintStroke, PointerSample};

use crate::{count, step, Grid, Pattern};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Shortest interval between generations, in milliseconds.
pub const MIN_SPEED_MS: u32 = 10;
/// Longest interval between generations, in milliseconds.
pub const MAX_SPEED_MS: u32 = 500;
pub const DEFAULT_SPEED_MS: u32 = 100;
pub const DEFAULT_GRID_SIZE: usize = 50;
pub const DEFAULT_DENSITY: f64 = 0.15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A field needs at least one cell per side.
    EmptyGrid,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EmptyGrid => write!(f, "grid size must be at least 1"),
        }
    }
}

impl std::error::Error for SimulationError {}

/// Owner of the live field.
///
/// Nothing outside this type writes cells; the renderer borrows the field
/// through [`Simulation::grid`] and the engine only produces new copies.
pub struct Simulation {
    grid: Grid,           // Square field, always `size x size`.
    generation: u64,      // Steps completed since the last reset.
    population: usize,    // Live cells in `grid`.
    is_running: bool,     // Whether `tick` advances the field.
    speed_ms: u32,        // Interval between generations.
    rng: ChaCha8Rng,      // Source for `randomize`.
    revision: u64,        // Bumped on every write to `grid`.
}

impl Simulation {
    /// Creates a paused simulation of side `size`, optionally seeded with
    /// a centred `pattern`.
    pub fn new(size: usize, pattern: Option<&Pattern>) -> Result<Self, SimulationError> {
        let mut sim = Self {
            grid: Grid::square(0),
            generation: 0,
            population: 0,
            is_running: false,
            speed_ms: DEFAULT_SPEED_MS,
            rng: ChaCha8Rng::from_entropy(),
            revision: 0,
        };
        sim.initialize(size, pattern)?;
        Ok(sim)
    }

    /// Replaces the generator behind [`Simulation::randomize`] with a seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Allocates a fresh `size x size` field, stamps `pattern` in its centre
    /// and resets the generation counter.
    ///
    /// Running state and speed are left as they are.
    pub fn initialize(
        &mut self,
        size: usize,
        pattern: Option<&Pattern>,
    ) -> Result<(), SimulationError> {
        if size == 0 {
            return Err(SimulationError::EmptyGrid);
        }
        let grid = match pattern {
            Some(p) => p.stamp(size),
            None => Grid::square(size),
        };
        self.replace_grid(grid);
        log::info!(
            "Field initialized: size={}, population={}",
            size,
            self.population
        );
        Ok(())
    }

    /// Loads `pattern` onto a fresh field of the current size and pauses.
    pub fn load_pattern(&mut self, pattern: &Pattern) {
        self.replace_grid(pattern.stamp(self.size()));
        self.set_running(false);
        log::info!("Pattern applied: population={}", self.population);
    }

    /// Advances one generation if running.
    ///
    /// Returns whether the field changed hands; a paused simulation is left
    /// as is.
    pub fn tick(&mut self) -> bool {
        if !self.is_running {
            return false;
        }
        let (grid, alive) = step(&self.grid);
        self.grid = grid;
        self.population = alive;
        self.generation += 1;
        self.revision += 1;
        log::trace!(
            "Generation {}: population={}",
            self.generation,
            self.population
        );
        true
    }

    /// Sets the cell at column `x`, row `y` to `state`, or flips it when
    /// `state` is `None`.
    ///
    /// Coordinates outside the field are ignored. Returns whether a cell was
    /// written.
    pub fn set_cell(&mut self, x: i64, y: i64, state: Option<bool>) -> bool {
        let Some(i) = self.grid.index_of(x, y) else {
            log::trace!("Ignoring cell ({}, {}) outside the field", x, y);
            return false;
        };
        let cell = self.grid.cell_mut(i);
        *cell = state.unwrap_or(!*cell);
        self.population = count(&self.grid);
        self.revision += 1;
        true
    }

    /// Paints the pointer path `points` as one stroke.
    ///
    /// The first point must hit the field; its inverse state becomes the
    /// stroke's mode for every later point. Returns the latched mode, or
    /// `None` when the stroke never started.
    pub fn paint_stroke<I>(&mut self, points: I) -> Option<bool>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut points = points.into_iter();
        let (x, y) = points.next()?;
        let mut stroke = PaintStroke::press(self, x, y)?;
        for (x, y) in points {
            stroke.drag(self, x, y);
        }
        Some(stroke.mode())
    }

    /// Kills every cell, resets the generation counter and pauses.
    pub fn clear(&mut self) {
        self.replace_grid(Grid::square(self.size()));
        self.set_running(false);
        log::info!("Field cleared");
    }

    /// Refills the field, each cell alive with probability `density`.
    ///
    /// `density` is clamped to `[0, 1]`. Running state is left untouched.
    pub fn randomize(&mut self, density: f64) {
        let density = if density.is_nan() {
            0.
        } else {
            density.clamp(0., 1.)
        };
        let size = self.size();
        let rng = &mut self.rng;
        let grid = Grid::from_fn(size, size, |_, _| rng.gen_bool(density));
        self.replace_grid(grid);
        log::info!(
            "Field randomized: density={}, population={}",
            density,
            self.population
        );
    }

    /// Sets the interval between generations, clamped to
    /// `MIN_SPEED_MS..=MAX_SPEED_MS`.
    pub fn set_speed(&mut self, ms: u32) {
        let clamped = ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS);
        if clamped != ms {
            log::debug!("Speed {} ms clamped to {} ms", ms, clamped);
        }
        self.speed_ms = clamped;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.is_running);
    }

    pub fn set_running(&mut self, running: bool) {
        if self.is_running != running {
            log::debug!("{}", if running { "Resumed" } else { "Paused" });
        }
        self.is_running = running;
    }

    fn replace_grid(&mut self, grid: Grid) {
        debug_assert!(grid.is_square());
        self.population = count(&grid);
        self.grid = grid;
        self.generation = 0;
        self.revision += 1;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.grid.side()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.population
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn speed(&self) -> u32 {
        self.speed_ms
    }

    /// Counter that changes whenever the field is written.
    ///
    /// Renderers compare it with the value they last drew to skip redundant
    /// uploads.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
