use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Resolve the server home directory.
///
/// An explicit value wins (with a leading `~` expanded against the user
/// home); otherwise the platform default is used: `%APPDATA%\<subdir>` on
/// Windows, `$HOME/<subdir>` elsewhere. The directory is created when
/// `create` is set.
pub fn resolve_home_dir(explicit: Option<String>, subdir: &str, create: bool) -> Result<PathBuf> {
    let resolved = match explicit {
        Some(raw) => expand_tilde(&raw)?,
        None => platform_base_dir()?.join(subdir),
    };

    if create {
        std::fs::create_dir_all(&resolved)
            .with_context(|| format!("Failed to create home dir {}", resolved.display()))?;
    }

    Ok(resolved)
}

fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        return Ok(user_home_dir()?.join(rest));
    }
    if raw == "~" {
        return user_home_dir();
    }
    Ok(PathBuf::from(raw))
}

fn platform_base_dir() -> Result<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("APPDATA is not set"))
    } else {
        user_home_dir()
    }
}

fn user_home_dir() -> Result<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("Cannot resolve the user home directory"))
}
