pub mod config;
pub mod dashboard;
pub mod error;
pub mod selection;
pub mod views;

pub use config::{Config, resolve_config_path};
pub use dashboard::Dashboard;
pub use error::{Error, Result};
pub use selection::{SelectionChange, SelectionState, VisualState};
pub use views::{DerivedViews, EngineViews};
