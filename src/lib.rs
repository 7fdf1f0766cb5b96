pub mod error;
pub mod icon;
pub mod paths;
pub mod settings;

pub use error::{MurmurError, Result};
pub use icon::IconBuilder;
pub use settings::{Settings, SettingsStore};
