// controller.rs - Pause/run state machine and input handling

use rand::Rng;

use crate::config::SimConfig;
use crate::grid::Grid;
use crate::rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Paused,
    Running,
}

impl RunState {
    pub fn toggled(self) -> Self {
        match self {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        }
    }
}

/// Everything the window can ask of the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Click { x: i32, y: i32 },
    TogglePause,
    Reset,
}

pub struct Simulation<R> {
    grid: Grid,
    state: RunState,
    generation: u64,
    config: SimConfig,
    rng: R,
}

impl<R: Rng> Simulation<R> {
    pub fn new(config: SimConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.grid_size),
            state: RunState::Paused,
            generation: 0,
            config,
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn handle(&mut self, input: Input) {
        match input {
            Input::Click { x, y } => {
                let alive = self.grid.toggle(x, y);
                log::trace!("Cell ({}, {}) -> {}", x, y, if alive { "alive" } else { "dead" });
            }
            Input::TogglePause => {
                self.state = self.state.toggled();
                log::info!("Simulation {}", match self.state {
                    RunState::Running => "resumed",
                    RunState::Paused => "paused",
                });
            }
            Input::Reset => {
                self.grid.clear_all();
                self.generation = 0;
                log::info!("Grid cleared");
            }
        }
    }

    /// Advances one generation unless paused. Returns whether the grid was
    /// touched.
    pub fn tick(&mut self) -> bool {
        if self.state == RunState::Paused {
            return false;
        }

        rule::step(&mut self.grid, &mut self.rng);
        self.generation += 1;
        log::debug!("Generation {}: {} live cells", self.generation, self.grid.population());
        true
    }
}
