//! Application configuration
//!
//! Configuration is merged from the following sources (lowest to highest priority):
//! 1. Built-in defaults
//! 2. `gol.toml` in the working directory (optional)
//! 3. Environment variables (`GOL_SECTION__KEY`)

use std::path::Path;
use std::time::Duration;

use figment::{Figment, providers::{Env, Format, Toml}};
use serde::{Deserialize, Serialize};

use crate::error::{LifeError, Result};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "gol.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default log filter (error, warn, info, debug, trace); `RUST_LOG` wins when set
    pub log_level: String,
    pub window: WindowConfig,
    pub simulation: SimulationConfig,
    pub pattern: PatternConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            simulation: SimulationConfig::default(),
            pattern: PatternConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `gol.toml` in the working directory plus `GOL_*` variables
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific file. A missing file is not an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut figment = Figment::new();

        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }

        // GOL_SIMULATION__STEP_INTERVAL_MS=100 -> simulation.step_interval_ms = 100
        figment = figment.merge(Env::prefixed("GOL_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.grid_dimensions().map(|_| ())
    }

    /// Grid size in cells as (cols, rows), derived from the window and cell size
    pub fn grid_dimensions(&self) -> Result<(usize, usize)> {
        let cell = self.simulation.cell_size;
        if cell == 0 {
            return Err(LifeError::Config("simulation.cell_size must be positive".to_string()));
        }
        let cols = (self.window.width / cell) as usize;
        let rows = (self.window.height / cell) as usize;
        if cols == 0 || rows == 0 {
            return Err(LifeError::Config(format!(
                "window {}x{} is smaller than one {}px cell",
                self.window.width, self.window.height, cell
            )));
        }
        Ok((cols, rows))
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Conway's Game of Life".to_string(),
            width: 500,
            height: 500,
        }
    }
}

/// Simulation and drawing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Wall-clock time between generations
    pub step_interval_ms: u64,
    /// Extra sleep after each frame; 0 relies on the frame wait alone
    pub frame_delay_ms: u64,
    /// Fixed live-cell color; random when unset
    pub color: Option<[u8; 3]>,
}

impl SimulationConfig {
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cell_size: 10,
            step_interval_ms: 150,
            frame_delay_ms: 16,
            color: None,
        }
    }
}

/// Pattern selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Pattern used when none is given on the command line
    pub default_name: String,
    /// Path of the `shapes.json` catalog
    pub catalog: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            default_name: "glider".to_string(),
            catalog: "shapes.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.simulation.step_interval(), Duration::from_millis(150));
        assert_eq!(config.pattern.default_name, "glider");
        assert_eq!(config.grid_dimensions().unwrap(), (50, 50));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("step_interval_ms"));
        assert!(toml.contains("catalog"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"
                log_level = "debug"

                [window]
                width = 300

                [simulation]
                cell_size = 5
                color = [255, 0, 128]
            "#)?;

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.window.width, 300);
            // Untouched keys keep their defaults
            assert_eq!(config.window.height, 500);
            assert_eq!(config.simulation.color, Some([255, 0, 128]));
            assert_eq!(config.grid_dimensions().unwrap(), (60, 100));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, r#"
                [simulation]
                step_interval_ms = 300
            "#)?;
            jail.set_env("GOL_SIMULATION__STEP_INTERVAL_MS", 75);
            jail.set_env("GOL_PATTERN__DEFAULT_NAME", "blinker");

            let config = AppConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.simulation.step_interval_ms, 75);
            assert_eq!(config.pattern.default_name, "blinker");
            Ok(())
        });
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("GOL_SIMULATION__CELL_SIZE", 0);
            assert!(matches!(AppConfig::load(), Err(LifeError::Config(_))));
            Ok(())
        });
    }

    #[test]
    fn test_window_smaller_than_cell_rejected() {
        let mut config = AppConfig::default();
        config.window.height = 4;
        assert!(matches!(config.grid_dimensions(), Err(LifeError::Config(_))));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "[window]\nwidth = \"wide\"")?;
            assert!(matches!(AppConfig::load(), Err(LifeError::Config(_))));
            Ok(())
        });
    }
}
