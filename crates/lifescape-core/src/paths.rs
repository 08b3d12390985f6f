use std::env;
use std::path::PathBuf;

/// Name of the data directory created under the user's home.
pub const DATA_DIR_NAME: &str = ".lifescape";

/// Return the user's home directory path.
///
/// Uses HOME on Unix-like systems and USERPROFILE on Windows.
pub fn home_dir() -> Option<PathBuf> {
    ["HOME", "USERPROFILE"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Default location of the slot files: `~/.lifescape`.
pub fn default_data_dir() -> Option<PathBuf> {
    home_dir().map(|home| home.join(DATA_DIR_NAME))
}
