use crate::utils::path::is_absolute;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: Self::log_file_default().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeflow")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeflow.conf")
    }

    /// Return the default path of the log file
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("timeflow")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and log files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Log file: user provided or default
        let log_path = if let Some(name) = custom_name {
            if is_absolute(&name) {
                PathBuf::from(name)
            } else {
                dir.join(name)
            }
        } else {
            Self::log_file_default()
        };

        let config = Config {
            log_file: log_path.to_string_lossy().to_string(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty log file if not exists
        if !log_path.exists() {
            if let Some(parent) = log_path.parent()
                && !parent.exists()
            {
                fs::create_dir_all(parent)?;
            }
            fs::File::create(&log_path)?;
        }

        println!("✅ Log file:    {:?}", log_path);

        Ok(())
    }
}
