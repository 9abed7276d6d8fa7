use anyhow::{Context, Result};
use dayfit_core::Goal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// `$DAYFIT_HOME`, or `~/.dayfit`.
pub fn dayfit_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("DAYFIT_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".dayfit"))
}

pub fn ensure_dayfit_home() -> Result<PathBuf> {
    let dir = dayfit_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub created_at_utc: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

pub fn default_timezone() -> String {
    "America/Chicago".to_string()
}

pub fn profile_path() -> Result<PathBuf> {
    Ok(ensure_dayfit_home()?.join("profile.json"))
}

pub fn write_profile(path: &Path, profile: &Profile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// `None` until `dayfit setup` has been run.
pub fn read_profile(path: &Path) -> Result<Option<Profile>> {
    if !path.exists() {
        return Ok(None);
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let profile = serde_json::from_str(&s).with_context(|| format!("parse {}", path.display()))?;
    Ok(Some(profile))
}
