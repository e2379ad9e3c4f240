use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Application configuration, stored as YAML in the user's home directory.
/// The letter-template fields feed the offer content generator; admins
/// edit them with `offerdesk config --edit`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_reporting_to")]
    pub reporting_to: String,
    #[serde(default = "default_signer_name")]
    pub signer_name: String,
    #[serde(default = "default_signer_title")]
    pub signer_title: String,
    #[serde(default = "default_accept_by")]
    pub accept_by: String,
}

fn default_company() -> String {
    "Genpact".to_string()
}
fn default_tagline() -> String {
    "Transformation Happens Here".to_string()
}
fn default_reporting_to() -> String {
    "Jane Smith, Engineering Manager".to_string()
}
fn default_signer_name() -> String {
    "John Doe".to_string()
}
fn default_signer_title() -> String {
    "Head of Human Resources".to_string()
}
fn default_accept_by() -> String {
    "December 1, 2023".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            company: default_company(),
            tagline: default_tagline(),
            reporting_to: default_reporting_to(),
            signer_name: default_signer_name(),
            signer_title: default_signer_title(),
            accept_by: default_accept_by(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".offerdesk"),
            None => PathBuf::from(".offerdesk"),
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("offerdesk.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("offerdesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file (tests work against a throwaway database and
        // must not touch the user's real configuration)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
