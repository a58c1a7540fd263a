//! Runtime configuration and logging setup

use crate::error::{ForecastError, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default values for configuration
const DEFAULT_PERIOD: i64 = 3;
const DEFAULT_MIN_PERIOD: i64 = 2;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ITEMS_PATH: &str = "data/items.csv";
const DEFAULT_SALES_PATH: &str = "data/sales.csv";
const CONFIG_DIR: &str = "config";
const ENV_PREFIX: &str = "SALES_FORECAST";

/// Settings for forecasting runs
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastConfig {
    /// SMA period used when none is given
    pub default_period: usize,
    /// Smallest period accepted from user input
    pub min_period: usize,
    /// CSV with `id,name,price,stock` rows
    pub items_path: PathBuf,
    /// CSV with `item_id,week,quantity` rows
    pub sales_path: PathBuf,
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl ForecastConfig {
    /// Check that the period settings make sense together
    pub fn validate(&self) -> Result<()> {
        if self.min_period == 0 {
            return Err(ForecastError::ConfigError(
                "min_period must be at least 1".to_string(),
            ));
        }
        if self.default_period < self.min_period {
            return Err(ForecastError::ConfigError(format!(
                "default_period ({}) is below min_period ({})",
                self.default_period, self.min_period
            )));
        }
        Ok(())
    }
}

/// Load configuration from `config/forecast.*` and `SALES_FORECAST__*` variables
pub fn load_config() -> Result<ForecastConfig> {
    load_config_from(CONFIG_DIR)
}

/// Load configuration, looking for an optional `forecast.*` file in `dir`
pub fn load_config_from<P: AsRef<Path>>(dir: P) -> Result<ForecastConfig> {
    let file = dir.as_ref().join("forecast");
    let file_name = file.to_string_lossy();

    let config = Config::builder()
        .set_default("default_period", DEFAULT_PERIOD)?
        .set_default("min_period", DEFAULT_MIN_PERIOD)?
        .set_default("items_path", DEFAULT_ITEMS_PATH)?
        .set_default("sales_path", DEFAULT_SALES_PATH)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&file_name).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: ForecastConfig = config.try_deserialize()?;
    config.validate()?;

    info!(
        default_period = config.default_period,
        min_period = config.min_period,
        "loaded forecast configuration"
    );

    Ok(config)
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once
/// keeps the first subscriber and returns `false`.
pub fn init_tracing(level: &str, json: bool) -> bool {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_directive = format!("sales_forecast={},forecast_report={}", level, level);
    let filter_directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter_directive));

    let installed = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };

    match installed {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "tracing subscriber already installed, keeping it");
            false
        }
    }
}
