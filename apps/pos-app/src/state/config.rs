//! # Configuration State
//!
//! Store settings loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     QRPOS_STORE_NAME, QRPOS_DB_PATH, QRPOS_STORAGE_KEY,                │
//! │     QRPOS_PERSIST, QRPOS_UTC_OFFSET                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/pos/pos.toml (Linux)                                     │
//! │     ~/Library/Application Support/com.qrpos.pos/pos.toml (macOS)       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     THB / ฿ / 2 decimals, UTC+7, persistence on, key "store"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # pos.toml
//! store_name = "Siam Corner Café"
//! currency_code = "THB"
//! currency_symbol = "฿"
//! currency_decimals = 2
//! utc_offset_hours = 7
//!
//! [storage]
//! enabled = true
//! database_path = "/var/lib/qrpos/qrpos.db"
//! key = "store"
//! ```
//!
//! ## Thread Safety
//! Read-only after startup, so no mutex.

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use qrpos_core::money::{group_thousands, MINOR_PER_MAJOR};
use qrpos_core::{Money, DEFAULT_STORAGE_KEY};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pos.toml";

/// File name of the database in the platform data directory.
pub const DATABASE_FILE_NAME: &str = "qrpos.db";

const MAX_CURRENCY_DECIMALS: u8 = 4;

// =============================================================================
// Storage Settings
// =============================================================================

/// Where and whether the admin snapshot is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// When false the admin state lives in memory only.
    pub enabled: bool,

    /// Explicit database file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Key the snapshot is stored under.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            enabled: true,
            database_path: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown in the dashboard header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    pub currency_symbol: String,

    /// Decimal places shown when formatting prices
    pub currency_decimals: u8,

    /// Offset of the store's local time from UTC, in hours.
    /// Decides which orders count as "today".
    pub utc_offset_hours: i32,

    pub storage: StorageConfig,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "QR POS Demo Store".to_string(),
            currency_code: "THB".to_string(),
            currency_symbol: "฿".to_string(),
            currency_decimals: 2,
            utc_offset_hours: 7,
            storage: StorageConfig::default(),
        }
    }
}

impl ConfigState {
    /// Loads configuration: defaults, then the TOML file (explicit path or
    /// the platform default), then `QRPOS_*` environment overrides.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |name| std::env::var(name).ok())
    }

    /// Like [`ConfigState::load`], reading overrides through `lookup`.
    pub fn load_with<F>(config_path: Option<PathBuf>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        info!(?path, "Config saved");
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage key must not be empty".into()));
        }

        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::Invalid(format!(
                "utc_offset_hours must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("QRPOS_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(path) = lookup("QRPOS_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Some(key) = lookup("QRPOS_STORAGE_KEY") {
            self.storage.key = key;
        }

        if let Some(flag) = lookup("QRPOS_PERSIST") {
            match parse_flag(&flag) {
                Some(enabled) => self.storage.enabled = enabled,
                None => warn!(value = %flag, "Ignoring unrecognised QRPOS_PERSIST"),
            }
        }

        if let Some(offset) = lookup("QRPOS_UTC_OFFSET") {
            match offset.trim().parse::<i32>() {
                Ok(hours) => self.utc_offset_hours = hours,
                Err(_) => warn!(value = %offset, "Ignoring unparsable QRPOS_UTC_OFFSET"),
            }
        }
    }

    /// Returns the default config file path for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "qrpos", "pos")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolves the database file: the configured path, or `qrpos.db` in the
    /// platform data directory.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.storage.database_path.clone().or_else(|| {
            directories::ProjectDirs::from("com", "qrpos", "pos")
                .map(|dirs| dirs.data_dir().join(DATABASE_FILE_NAME))
        })
    }

    pub fn utc_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }

    /// Today's date in the store's local time.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.utc_offset()).date_naive()
    }

    /// Formats an amount with the configured symbol, grouping and decimals.
    ///
    /// ## Example
    /// ```rust
    /// use qrpos_app::state::ConfigState;
    /// use qrpos_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_major(1180)), "฿1,180.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimals = u32::from(self.currency_decimals);
        let scale = 10_i128.pow(decimals);
        let minor = i128::from(amount.minor());
        let per_major = i128::from(MINOR_PER_MAJOR);

        // Rescale satang to the display precision, rounding half away from zero
        let scaled = (minor.abs() * scale * 2 + per_major) / (per_major * 2);
        let whole = scaled / scale;
        let frac = scaled % scale;

        let sign = if amount.is_negative() && scaled != 0 { "-" } else { "" };
        let grouped = group_thousands(whole as u64);

        if decimals > 0 {
            format!(
                "{}{}{}.{:0width$}",
                sign,
                self.currency_symbol,
                grouped,
                frac,
                width = decimals as usize
            )
        } else {
            format!("{}{}{}", sign, self.currency_symbol, grouped)
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
