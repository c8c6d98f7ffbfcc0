// tick_loop.rs - Fixed-interval driver for a Simulation
//
// The simulation lives inside one task. Input events and ticks are
// interleaved there, so the grid never needs a lock; the window only ever
// sees the snapshots published on the watch channel.

use rand::Rng;
use tokio::sync::{mpsc, watch};
use tokio::time::{self, MissedTickBehavior};

use crate::controller::{Input, RunState, Simulation};
use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub state: RunState,
}

impl Snapshot {
    pub fn of<R: Rng>(sim: &Simulation<R>) -> Self {
        Self {
            grid: sim.grid().clone(),
            generation: sim.generation(),
            state: sim.state(),
        }
    }
}

/// Runs until every input sender is dropped, then hands the simulation back.
pub async fn run<R: Rng>(
    mut sim: Simulation<R>,
    mut inputs: mpsc::UnboundedReceiver<Input>,
    snapshots: watch::Sender<Snapshot>,
) -> Simulation<R> {
    let mut interval = time::interval(sim.config().tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    snapshots.send_replace(Snapshot::of(&sim));

    loop {
        tokio::select! {
            biased;

            input = inputs.recv() => match input {
                Some(input) => {
                    sim.handle(input);
                    snapshots.send_replace(Snapshot::of(&sim));
                }
                None => break,
            },

            _ = interval.tick() => {
                if sim.tick() {
                    snapshots.send_replace(Snapshot::of(&sim));
                }
            }
        }
    }

    log::debug!("Tick loop stopped at generation {}", sim.generation());
    sim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;

    fn channels() -> (
        Simulation<StdRng>,
        watch::Sender<Snapshot>,
        watch::Receiver<Snapshot>,
    ) {
        let sim = Simulation::new(SimConfig::default(), StdRng::seed_from_u64(3));
        let (tx, rx) = watch::channel(Snapshot::of(&sim));
        (sim, tx, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_inputs_are_applied() {
        let (sim, snap_tx, snap_rx) = channels();
        let (input_tx, input_rx) = mpsc::unbounded_channel();

        input_tx.send(Input::Click { x: 10, y: 10 }).unwrap();
        input_tx.send(Input::Click { x: 20, y: 30 }).unwrap();
        input_tx.send(Input::Click { x: 20, y: 30 }).unwrap();
        drop(input_tx);

        let sim = run(sim, input_rx, snap_tx).await;
        assert!(sim.grid().get(10, 10));
        assert!(!sim.grid().get(20, 30));
        assert_eq!(snap_rx.borrow().grid, *sim.grid());
        assert_eq!(sim.state(), RunState::Paused);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_loop_does_not_advance() {
        let (sim, snap_tx, snap_rx) = channels();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(sim, input_rx, snap_tx));

        input_tx.send(Input::Click { x: 5, y: 5 }).unwrap();
        input_tx.send(Input::Click { x: 6, y: 6 }).unwrap();
        time::sleep(Duration::from_secs(1)).await;

        {
            let snapshot = snap_rx.borrow();
            assert_eq!(snapshot.generation, 0);
            assert_eq!(snapshot.grid.live_cells(), vec![(5, 5), (6, 6)]);
        }

        drop(input_tx);
        let sim = handle.await.unwrap();
        assert_eq!(sim.generation(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_running_loop_ticks_on_interval() {
        let (sim, snap_tx, snap_rx) = channels();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run(sim, input_rx, snap_tx));

        input_tx.send(Input::Click { x: 5, y: 5 }).unwrap();
        input_tx.send(Input::Click { x: 6, y: 6 }).unwrap();
        input_tx.send(Input::TogglePause).unwrap();
        time::sleep(Duration::from_millis(350)).await;

        {
            let snapshot = snap_rx.borrow();
            assert_eq!(snapshot.state, RunState::Running);
            assert!(snapshot.generation >= 2);
            // Diagonal pair keeps its upper cell for one tick, then empties
            assert_eq!(snapshot.grid.population(), 0);
        }

        input_tx.send(Input::TogglePause).unwrap();
        input_tx.send(Input::Reset).unwrap();
        drop(input_tx);

        let sim = handle.await.unwrap();
        assert_eq!(sim.state(), RunState::Paused);
        assert_eq!(sim.generation(), 0);
    }
}
