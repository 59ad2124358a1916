use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

/// Resolve the application home directory into an absolute path.
///
/// - `None` (or blank) => `<user home>/<default_subdir>`
/// - `~` / `~/rest` => expanded against the user home
/// - relative paths => joined onto the current directory
///
/// With `create`, the directory is created if missing.
pub fn resolve_home_dir(
    requested: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let resolved = match requested.as_deref().map(str::trim) {
        None | Some("") => user_home()?.join(default_subdir),
        Some("~") => user_home()?,
        Some(p) if p.starts_with("~/") || p.starts_with("~\\") => user_home()?.join(&p[2..]),
        Some(p) => absolutize(Path::new(p))?,
    };

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("Failed to create home dir '{}'", resolved.display()))?;
    }
    Ok(resolved)
}

fn user_home() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine the user home directory"))
}

fn absolutize(p: &Path) -> Result<PathBuf> {
    if p.is_absolute() {
        return Ok(p.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Cannot read current directory")?;
    Ok(cwd.join(p))
}
