use thiserror::Error;

/// Main error type for murmur
#[derive(Error, Debug)]
pub enum MurmurError {
    #[error("Settings parse error: {0}\n\nTroubleshooting:\n- The settings file must contain a single JSON object\n- Fix the file by hand or move it aside to regenerate defaults\n- The file is never replaced automatically")]
    Parse(String),

    #[error("Icon render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MurmurError>;
