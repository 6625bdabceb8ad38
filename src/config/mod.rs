use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

/// Study-level configuration: the observation window, the reference instants
/// used by the tenure calculator, and the month normalization constant.
/// Every component receives these explicitly; nothing reads ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyConfig {
    /// First day of the study window (survival time zero).
    pub window_start: NaiveDate,
    /// Last day of the study window (censoring date).
    pub window_end: NaiveDate,
    /// Instant at which current tenure is evaluated.
    pub tenure_reference: NaiveDate,
    /// Upper cutoff for total-tenure accumulation.
    pub tenure_cutoff: NaiveDate,
    #[serde(default = "default_days_per_month")]
    pub days_per_month: f64,
}

fn default_days_per_month() -> f64 {
    30.4375
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            window_start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            window_end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            tenure_reference: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            tenure_cutoff: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            days_per_month: default_days_per_month(),
        }
    }
}

impl StudyConfig {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("spellpanel")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".spellpanel")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("spellpanel.conf")
    }

    /// Load configuration from the given path, or from the standard location,
    /// or return defaults if no file exists.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => Self::config_file(),
        };

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: StudyConfig =
                serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
            cfg.validate()?;
            Ok(cfg)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the configuration to disk, creating the config dir if needed.
    pub fn save(&self, custom: Option<&str>) -> AppResult<PathBuf> {
        self.validate()?;

        let path = match custom {
            Some(p) => PathBuf::from(p),
            None => {
                fs::create_dir_all(Self::config_dir())?;
                Self::config_file()
            }
        };

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.window_end < self.window_start {
            return Err(AppError::InvalidWindow(format!(
                "window_end {} precedes window_start {}",
                self.window_end, self.window_start
            )));
        }
        if self.days_per_month <= 0.0 {
            return Err(AppError::Config(
                "days_per_month must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Window length in days, inclusive of both endpoints.
    pub fn window_days(&self) -> i64 {
        (self.window_end - self.window_start).num_days() + 1
    }
}
