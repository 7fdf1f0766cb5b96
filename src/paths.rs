//! Base directory resolution
//!
//! Both the settings file and the generated icon live next to the running
//! executable. Components take the base directory as a constructor argument;
//! [`exe_dir`] is the default the binary injects.

use crate::error::{MurmurError, Result};
use std::path::PathBuf;

/// Settings file name inside the base directory
pub const SETTINGS_FILE: &str = "config.json";

/// Icon file name inside the base directory
pub const ICON_FILE: &str = "icon.ico";

/// Directory containing the running executable
pub fn exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        MurmurError::Other(format!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exe_dir_contains_current_exe() {
        let dir = exe_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert!(dir.is_dir());
        assert_eq!(exe.parent().unwrap(), dir);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SETTINGS_FILE, "config.json");
        assert_eq!(ICON_FILE, "icon.ico");
    }
}
