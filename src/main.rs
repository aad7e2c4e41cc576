use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use log::{debug, info};
use macroquad::prelude::*;

use gol_runner::{
    AppConfig, Driver, LaunchOptions, LifeError, Result, RunState,
    application::startup,
    config::WindowConfig,
    rendering::MacroquadSink,
};

/// Run Conway's Game of Life from a named starting pattern
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    launch: LaunchOptions,

    /// Print the available patterns with their descriptions and exit
    #[arg(long)]
    list: bool,
}

fn window_conf(window: &WindowConfig) -> Conf {
    Conf {
        window_title: window.title.clone(),
        window_width: window.width as i32,
        window_height: window.height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::load();

    let level = config.as_ref().map_or("info", |c| c.log_level.as_str());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match config.and_then(|config| run(cli, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<()> {
    if cli.list {
        let source = startup::select_source(&cli.launch, &config);
        return startup::write_listing(source.as_ref(), &mut io::stdout().lock());
    }

    let driver = startup::prepare(&cli.launch, &config)?;
    run_window(window_conf(&config.window), driver, config.simulation.frame_delay())
}

/// Open the window and run the frame loop until it stops.
///
/// macroquad panics when it cannot create the window or GL context; that
/// panic is turned into a startup error here.
fn run_window(conf: Conf, driver: Driver, frame_delay: Duration) -> Result<()> {
    catch_quietly(|| macroquad::Window::from_config(conf, frame_loop(driver, frame_delay)))
        .map_err(LifeError::StartupResourceFailure)
}

/// Run `f`, turning a panic into its message. The panic hook is swapped out
/// meanwhile so nothing is printed ahead of our own error line.
fn catch_quietly<T>(f: impl FnOnce() -> T) -> std::result::Result<T, String> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|info| debug!("window panicked: {info}")));

    let outcome = panic::catch_unwind(AssertUnwindSafe(f));

    panic::set_hook(previous_hook);
    outcome.map_err(|payload| panic_message(payload.as_ref()))
}

async fn frame_loop(mut driver: Driver, frame_delay: Duration) {
    let mut sink = MacroquadSink::install();

    while driver.iterate(&mut sink, Instant::now()) == RunState::Running {
        if !frame_delay.is_zero() {
            std::thread::sleep(frame_delay);
        }
        next_frame().await;
    }

    info!("Stopped after {} generations", driver.simulation().generation());
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
