pub mod json_store;
pub mod settings_model;
pub mod settings_service;
pub mod settings_traits;
pub use json_store::JsonFileDesignStore;
pub use settings_model::*;
pub use settings_service::{DesignService, DesignServiceTrait};
pub use settings_traits::DesignStoreTrait;
