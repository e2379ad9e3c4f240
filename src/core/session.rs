//! Session identity: the signed-in employee id.
//!
//! One string value under a fixed key, in one of two tiers chosen by the
//! "keep me signed in" flag: a long-lived file next to the config, or a
//! short-lived file in the system temp directory. No expiry and no
//! validation; a stored id is trusted as-is.

use crate::config::Config;
use crate::errors::AppResult;
use std::env;
use std::fs;
use std::path::PathBuf;

const IDENTITY_KEY: &str = "employee_id";

pub struct SessionStore {
    long_lived: PathBuf,
    short_lived: PathBuf,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            long_lived: Config::config_dir().join(IDENTITY_KEY),
            short_lived: env::temp_dir().join(format!("offerdesk_{IDENTITY_KEY}")),
        }
    }

    /// Sign in: remember the id in the tier the flag selects.
    pub fn store(&self, employee_id: &str, keep_signed_in: bool) -> AppResult<()> {
        self.clear()?;

        let target = if keep_signed_in {
            &self.long_lived
        } else {
            &self.short_lived
        };
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, employee_id)?;
        Ok(())
    }

    /// The signed-in id, long-lived tier first.
    pub fn current(&self) -> Option<String> {
        for path in [&self.long_lived, &self.short_lived] {
            if let Ok(raw) = fs::read_to_string(path) {
                let id = raw.trim().to_string();
                if !id.is_empty() {
                    return Some(id);
                }
            }
        }
        None
    }

    /// Sign out: drop both tiers.
    pub fn clear(&self) -> AppResult<()> {
        for path in [&self.long_lived, &self.short_lived] {
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
