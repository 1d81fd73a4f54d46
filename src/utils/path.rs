//! Path utilities: expand ~ and resolve output paths.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Explicit `--file` wins; otherwise `default_name` inside `dir` (or the
/// current directory when `dir` is empty).
pub fn resolve_output(file: Option<&str>, dir: &str, default_name: &str) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None if dir.trim().is_empty() => PathBuf::from(default_name),
        None => expand_tilde(dir).join(default_name),
    }
}

