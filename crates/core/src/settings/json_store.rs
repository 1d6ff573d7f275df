use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;

use super::settings_model::{DesignSettings, DESIGN_SETTINGS_KEY};
use super::settings_traits::DesignStoreTrait;
use crate::errors::Result;

/// Design settings kept as a JSON file in a settings directory.
///
/// Stored fields are laid over the defaults, so a file written by an older
/// version with missing keys still loads. A file that is not a JSON object
/// or holds invalid values is ignored and the defaults are used.
pub struct JsonFileDesignStore {
    path: PathBuf,
}

impl JsonFileDesignStore {
    pub fn new(settings_dir: impl AsRef<Path>) -> Self {
        Self {
            path: settings_dir
                .as_ref()
                .join(format!("{}.json", DESIGN_SETTINGS_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DesignStoreTrait for JsonFileDesignStore {
    fn load(&self) -> Result<DesignSettings> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No design settings at {}, using defaults", self.path.display());
                return Ok(DesignSettings::default());
            }
            Err(e) => return Err(e.into()),
        };

        match merge_over_defaults(&contents) {
            Some(settings) => Ok(settings),
            None => {
                warn!(
                    "Ignoring unreadable design settings at {}",
                    self.path.display()
                );
                Ok(DesignSettings::default())
            }
        }
    }

    fn save(&self, settings: &DesignSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        debug!("Saved design settings to {}", self.path.display());
        Ok(())
    }
}

fn merge_over_defaults(contents: &str) -> Option<DesignSettings> {
    let Ok(Value::Object(stored)) = serde_json::from_str::<Value>(contents) else {
        return None;
    };
    let Ok(Value::Object(mut merged)) = serde_json::to_value(DesignSettings::default()) else {
        return None;
    };
    merged.extend(stored);

    let settings: DesignSettings = serde_json::from_value(Value::Object(merged)).ok()?;
    settings.validate().ok()?;
    Some(settings)
}
