//! Where tagkit stores its own data (config).
//!
//! Notes stay wherever the user keeps them. We only store settings here.

use std::path::PathBuf;

/// Returns the directory where tagkit stores its config.
/// On Linux: `~/.local/share/tagkit/`.
/// Creates the directory if it doesn't exist; returns `None` if we can't determine the path.
pub fn app_data_dir() -> Option<PathBuf> {
    let dir = directories::ProjectDirs::from("app", "Tagkit", "tagkit")?
        .data_local_dir()
        .to_path_buf();
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}
