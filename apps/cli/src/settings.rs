//! # Settings
//!
//! Run settings for the `kassa` binary.
//!
//! ## Sources (Priority Order, highest first)
//! 1. Command-line flags (`--orders`, `--receipt`, `--catalog`)
//! 2. Environment variables (`KASSA_ORDERS_PATH`, `KASSA_LAYOUT__TITLE`, ...)
//! 3. Settings file (`--config <file>`, or `./kassa.toml` when present)
//! 4. Defaults (this file)
//!
//! ## Example `kassa.toml`
//! ```toml
//! orders_path = "orders.txt"
//! receipt_path = "check.txt"
//! catalog_path = "catalog.json"
//!
//! [layout]
//! title = "Receipt"
//! total_label = "Total:"
//! unresolved_label = "Not found:"
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use kassa_core::ReceiptLayout;
use serde::Deserialize;

use crate::args::Args;

/// Default order file, relative to the working directory.
pub const DEFAULT_ORDERS_PATH: &str = "orders.txt";

/// Default receipt file, relative to the working directory.
pub const DEFAULT_RECEIPT_PATH: &str = "check.txt";

/// Settings file looked up (without extension) when `--config` is absent.
pub const DEFAULT_SETTINGS_NAME: &str = "kassa";

/// Prefix of the environment variables read as settings.
pub const ENV_PREFIX: &str = "KASSA";

/// Settings for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub orders_path: PathBuf,

    pub receipt_path: PathBuf,

    /// JSON catalog; the built-in catalog is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    #[serde(default)]
    pub layout: ReceiptLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            orders_path: PathBuf::from(DEFAULT_ORDERS_PATH),
            receipt_path: PathBuf::from(DEFAULT_RECEIPT_PATH),
            catalog_path: None,
            layout: ReceiptLayout::default(),
        }
    }
}

impl Settings {
    /// Loads settings from every source and applies flag overrides.
    pub fn load(args: &Args) -> Result<Self, SettingsError> {
        let file = match args.config() {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_NAME).required(false),
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");

        let settings: Settings = Config::builder()
            .set_default("orders_path", DEFAULT_ORDERS_PATH)?
            .set_default("receipt_path", DEFAULT_RECEIPT_PATH)?
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()?;

        settings.with_overrides(args).validated()
    }

    /// Replaces values with the ones given on the command line.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(path) = args.orders() {
            self.orders_path = path.to_path_buf();
        }
        if let Some(path) = args.receipt() {
            self.receipt_path = path.to_path_buf();
        }
        if let Some(path) = args.catalog() {
            self.catalog_path = Some(path.to_path_buf());
        }
        self
    }

    /// Rejects settings that would make the run destroy its own input.
    pub fn validated(self) -> Result<Self, SettingsError> {
        if self.orders_path == self.receipt_path {
            return Err(SettingsError::SamePath(self.orders_path));
        }
        Ok(self)
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid settings: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Orders and receipt must be different files: {}", .0.display())]
    SamePath(PathBuf),
}
