// What you SEE:
// • A 640x480 window showing a gray XOR pattern, redrawn as fast as possible.
// • Left click (or Space): the best frame rate so far and its MB/sec appear
//   on the console and in the title bar; answer q to stop, Enter to go on.
// • Esc or closing the window quits.
//
// Usage: blit-bench [config.json]

mod bench;
mod clock;
mod config;
mod draw;
mod error;
mod pattern;
mod report;
mod surface;
mod types;

#[cfg(test)]
mod mock;

use bench::CopyLoop;
use clock::MonotonicClock;
use config::Config;
use draw::Drawer;
use error::Error;
use log::{info, warn};
use report::ConsolePresenter;
use std::path::PathBuf;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    /* --- Config ---
       No argument: the classic 640x480 test. */
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;
    info!("Config: {}", config.to_json()?);

    /* --- Pattern buffer ---
       Built once; every frame copies these exact bytes. */
    let buffer = pattern::fill_pattern(config.dimensions())?;
    if let Some(path) = &config.pattern_png {
        pattern::save_png(&buffer, path)?;
        info!("Pattern written to {}", path.display());
    }

    /* --- Window ---
       Visual: the pattern window opens. */
    let drawer = Drawer::new(&config)?;
    let presenter = ConsolePresenter::stdio(config.prompt);

    /* ------------------------------ Main loop ------------------------------ */
    let mut bench = CopyLoop::new(drawer, buffer, MonotonicClock::new(), presenter);
    let summary = bench.run()?;

    match (summary.report, summary.best) {
        (Some(r), Some(best)) => {
            info!("{} over {} frames, best frame {best} ticks", r.heading(), summary.samples);
            info!("{r}");
        }
        _ => warn!("No usable frames measured ({} samples)", summary.samples),
    }

    Ok(())
}
