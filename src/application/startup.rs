//! Everything that runs before the window opens.
//!
//! Pattern lookup, catalog reading and grid sizing all fail here, so a bad
//! pattern name or catalog never gets as far as acquiring a window.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use log::{info, warn};

use super::{Driver, Simulation, StepClock, Tint};
use crate::config::AppConfig;
use crate::domain::{BuiltinCatalog, JsonCatalog, PatternSource};
use crate::error::{LifeError, Result};

// Pattern selection from the command line, flattened into the binary's CLI
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Pattern to load (defaults to pattern.default_name from the config)
    pub pattern: Option<String>,

    /// Pattern catalog file, overriding pattern.catalog from the config
    #[arg(long, value_name = "PATH", conflicts_with = "builtin")]
    pub catalog: Option<PathBuf>,

    /// Use the built-in presets instead of a catalog file
    #[arg(long)]
    pub builtin: bool,
}

/// The catalog the options and config point at. Nothing is read yet.
pub fn select_source(options: &LaunchOptions, config: &AppConfig) -> Box<dyn PatternSource> {
    if options.builtin {
        return Box::new(BuiltinCatalog);
    }
    let path = options
        .catalog
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.pattern.catalog));
    Box::new(JsonCatalog::new(path))
}

/// Write one `name  description` line per pattern.
/// A reader that goes away early (closed pipe) is not an error.
pub fn write_listing(source: &dyn PatternSource, out: &mut dyn Write) -> Result<()> {
    let patterns = source.patterns()?;
    let written = patterns.iter().try_for_each(|p| {
        let line = format!("{:<14} {}", p.name, p.description);
        writeln!(out, "{}", line.trim_end())
    });

    match written.and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(LifeError::from),
    }
}

/// Load the pattern, size and seed the grid, and build the driver
pub fn prepare(options: &LaunchOptions, config: &AppConfig) -> Result<Driver> {
    let source = select_source(options, config);

    let name = options
        .pattern
        .clone()
        .unwrap_or_else(|| config.pattern.default_name.clone());
    info!("Loading pattern: {name}");
    let pattern = source.load(&name)?;

    let (cols, rows) = config.grid_dimensions()?;
    let mut simulation = Simulation::new(cols, rows);
    let placed = simulation.seed_centered(&pattern);
    let (cols, rows) = simulation.dimensions();
    info!(
        "Seeded '{}' ({}x{}) on a {}x{} grid",
        pattern.name, pattern.width, pattern.height, cols, rows
    );
    if placed < pattern.cells.len() {
        warn!("{} of {} cells fell outside the grid", pattern.cells.len() - placed, pattern.cells.len());
    }

    let tint = config.simulation.color.map_or_else(Tint::random, Tint::from);
    info!("Live cell color: #{:02x}{:02x}{:02x}", tint.r, tint.g, tint.b);

    let clock = StepClock::new(config.simulation.step_interval(), Instant::now());
    info!("Stepping every {:?}", clock.interval());

    Ok(Driver::new(simulation, clock, config.simulation.cell_size as f32, tint))
}
