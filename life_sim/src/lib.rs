// lib.rs - Scatter-life simulation core: grid, update rule, controls, tick loop

pub mod config;
pub mod controller;
pub mod grid;
pub mod rule;
pub mod tick_loop;

pub use config::SimConfig;
pub use controller::{Input, RunState, Simulation};
pub use grid::{Cell, Grid};
pub use tick_loop::Snapshot;
