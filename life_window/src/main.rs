// main.rs - Scatter-life window: starts the tick loop, then hands off to egui

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::{mpsc, watch};

use life_sim::config::{WINDOW_SIZE, WINDOW_TITLE};
use life_sim::{SimConfig, Simulation, Snapshot, tick_loop};

mod ui;

use ui::LifeWindow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    log::info!("{}", WINDOW_TITLE);
    log::info!("Controls:");
    log::info!("  Click - Toggle a cell");
    log::info!("  Space - Pause / Resume");
    log::info!("  R     - Clear grid");

    // One worker keeps the simulation on a single thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("tick-loop")
        .enable_time()
        .build()?;

    let config = SimConfig::default();
    let sim = Simulation::new(config, StdRng::from_entropy());
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(Snapshot::of(&sim));
    runtime.spawn(tick_loop::run(sim, input_rx, snapshot_tx));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(LifeWindow::new(config, input_tx, snapshot_rx, runtime))),
    )?;

    Ok(())
}
