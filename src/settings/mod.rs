//! Settings persistence for murmur
//!
//! The settings record lives in `config.json` next to the executable.
//! A missing file is created with defaults on first load. Recognized keys
//! missing from an existing file are backfilled in memory; unrecognized keys
//! are kept and written back on the next save.
//!
//! # Example
//!
//! ```no_run
//! use murmur::settings::SettingsStore;
//!
//! let store = SettingsStore::from_exe_dir().expect("Failed to resolve base dir");
//! let mut settings = store.load().expect("Failed to load settings");
//! settings.set("window_x", 240);
//! store.save(&settings).expect("Failed to save settings");
//! ```

pub mod defaults;
pub mod record;
pub mod store;

pub use defaults::{DefaultValue, SettingDefault, DEFAULTS};
pub use record::Settings;
pub use store::SettingsStore;
