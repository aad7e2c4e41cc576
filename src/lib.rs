// Domain layer - Grid, transition rule, patterns and catalogs
pub mod domain;

// Application layer - Simulation stepping and the fixed-timestep driver
pub mod application;

// Infrastructure layer - config, errors, rendering, input
pub mod config;
pub mod error;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Pattern, PatternSource, JsonCatalog, BuiltinCatalog, presets};
pub use application::{Simulation, StepClock, Driver, RunState, RenderSink, Tint, LaunchOptions};
pub use config::AppConfig;
pub use error::{LifeError, Result};
