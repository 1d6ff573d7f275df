//! Storage traits for settings.

use crate::errors::Result;
use crate::settings::DesignSettings;

/// Persistent store for design settings.
pub trait DesignStoreTrait: Send + Sync {
    /// Stored settings, or the defaults when nothing usable is stored.
    fn load(&self) -> Result<DesignSettings>;

    /// Replace the stored settings.
    fn save(&self, settings: &DesignSettings) -> Result<()>;
}
