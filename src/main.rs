//! Light Clock entry point
//!
//! Wires settings, display and light images into a `LightClock`, then runs
//! the once-per-second cycle against a headless sprite board.

use std::path::PathBuf;
use std::process::ExitCode;

use light_clock::clock::{LightCatalog, LightClock};
use light_clock::platform::{ConfiguredDisplays, ImageDirectory, register_all, select_single_display};
use light_clock::renderer::SpriteBoard;
use light_clock::{Result, Settings};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Light Clock starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&path);

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<()> {
    let screen = select_single_display(&ConfiguredDisplays(settings.displays.clone()))?;

    let mut catalog = LightCatalog::new();
    register_all(&mut catalog, &ImageDirectory::new(&settings.asset_dir))?;

    let mut clock = LightClock::new(screen, catalog, settings.row_offsets())?;
    let mut board = SpriteBoard::new(clock.background_positions());
    log::info!(
        "'{}' ready: {} background lights",
        settings.window_title,
        board.background().len()
    );

    let mut ticks = 0u64;
    loop {
        let changes = clock.evaluate(&chrono::Local::now());
        let redrawn = board.apply(&changes);
        if redrawn > 0 {
            log::debug!("Redrew {} rows, lit: {:?}", redrawn, board.lit_counts());
        }

        ticks += 1;
        if settings.max_ticks.is_some_and(|max| ticks >= max) {
            log::info!("Stopping after {} ticks", ticks);
            return Ok(());
        }
        std::thread::sleep(settings.tick_interval());
    }
}
