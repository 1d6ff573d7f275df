use super::DesignStoreTrait;
use crate::errors::Result;
use crate::settings::{DesignSettings, DesignSettingsUpdate, DesignStyle};
use log::{debug, error};
use std::collections::BTreeMap;
use std::sync::Arc;

pub trait DesignServiceTrait: Send + Sync {
    fn get_design_settings(&self) -> Result<DesignSettings>;

    /// Apply a partial update and persist it. Returns the new settings.
    fn update_design_settings(&self, update: &DesignSettingsUpdate) -> Result<DesignSettings>;

    fn set_design_style(&self, style: DesignStyle) -> Result<DesignSettings>;

    /// Restore and persist the defaults.
    fn reset_design_settings(&self) -> Result<DesignSettings>;

    /// CSS custom properties for the current settings.
    fn get_css_variables(&self) -> Result<BTreeMap<&'static str, String>>;
}

pub struct DesignService {
    store: Arc<dyn DesignStoreTrait>,
}

impl DesignServiceTrait for DesignService {
    fn get_design_settings(&self) -> Result<DesignSettings> {
        self.store.load()
    }

    fn update_design_settings(&self, update: &DesignSettingsUpdate) -> Result<DesignSettings> {
        let current = self.store.load()?;
        let updated = current.apply(update).map_err(|e| {
            error!("Rejected design settings update {:?}: {}", update, e);
            e
        })?;

        if updated != current {
            self.store.save(&updated)?;
            debug!("Design settings updated: {:?}", updated);
        }
        Ok(updated)
    }

    fn set_design_style(&self, style: DesignStyle) -> Result<DesignSettings> {
        self.update_design_settings(&DesignSettingsUpdate {
            style: Some(style),
            ..DesignSettingsUpdate::default()
        })
    }

    fn reset_design_settings(&self) -> Result<DesignSettings> {
        let defaults = DesignSettings::default();
        self.store.save(&defaults)?;
        debug!("Design settings reset to defaults");
        Ok(defaults)
    }

    fn get_css_variables(&self) -> Result<BTreeMap<&'static str, String>> {
        Ok(self.store.load()?.css_variables())
    }
}

impl DesignService {
    pub fn new(store: Arc<dyn DesignStoreTrait>) -> Self {
        DesignService { store }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::settings::JsonFileDesignStore;
    use tempfile::tempdir;

    fn service(dir: &std::path::Path) -> DesignService {
        DesignService::new(Arc::new(JsonFileDesignStore::new(dir)))
    }

    #[test]
    fn test_update_persists_across_instances() {
        let dir = tempdir().unwrap();
        service(dir.path())
            .update_design_settings(&DesignSettingsUpdate {
                glassmorphism_intensity: Some(0.4),
                ..DesignSettingsUpdate::default()
            })
            .unwrap();

        let reloaded = service(dir.path()).get_design_settings().unwrap();
        assert_eq!(reloaded.glassmorphism_intensity, 0.4);
        assert_eq!(reloaded.style, DesignStyle::Glass);
    }

    #[test]
    fn test_set_style_changes_css_variables() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());

        service.set_design_style(DesignStyle::Classic).unwrap();
        let vars = service.get_css_variables().unwrap();
        assert_eq!(vars["--backdrop-blur-intensity"], "0px");
        assert_eq!(vars["--border-glass-opacity"], "0.3");
    }

    #[test]
    fn test_invalid_update_leaves_stored_settings() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());
        service.set_design_style(DesignStyle::Minimal).unwrap();

        let result = service.update_design_settings(&DesignSettingsUpdate {
            glassmorphism_intensity: Some(-0.5),
            ..DesignSettingsUpdate::default()
        });
        assert!(matches!(result, Err(Error::Validation(_))));

        let stored = service.get_design_settings().unwrap();
        assert_eq!(stored.style, DesignStyle::Minimal);
        assert_eq!(stored.glassmorphism_intensity, 0.8);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = tempdir().unwrap();
        let service = service(dir.path());
        service
            .update_design_settings(&DesignSettingsUpdate {
                style: Some(DesignStyle::Minimal),
                border_radius: Some(2.0),
                ..DesignSettingsUpdate::default()
            })
            .unwrap();

        assert_eq!(
            service.reset_design_settings().unwrap(),
            DesignSettings::default()
        );
        assert_eq!(
            service.get_design_settings().unwrap(),
            DesignSettings::default()
        );
    }
}
