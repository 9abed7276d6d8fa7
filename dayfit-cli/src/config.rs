use anyhow::{Context, Result};
use dayfit_core::Goal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::{default_timezone, ensure_dayfit_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogSection,
    pub profile: ProfileSection,
    pub planner: PlannerSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSection {
    pub foods: PathBuf,
    pub exercises: PathBuf,
}

/// Fallback identity when no profile.json exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    pub user_id: String,
    pub goal: Goal,
    pub timezone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerSection {
    /// Append energy/mood defaults after the declared preferences.
    pub baseline_fill: bool,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            foods: PathBuf::from("data/foods.csv"),
            exercises: PathBuf::from("data/exercises.csv"),
        }
    }
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            user_id: "local".to_string(),
            goal: Goal::Maintain,
            timezone: default_timezone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_dayfit_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(p: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&p, &Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.catalog.foods, PathBuf::from("data/foods.csv"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[planner]\nbaseline_fill = true\n\n[profile]\ngoal = \"lose\"\n").unwrap();
        let cfg = load_config_from(&p).unwrap();
        assert!(cfg.planner.baseline_fill);
        assert_eq!(cfg.profile.goal, Goal::Lose);
        assert_eq!(cfg.profile.user_id, "local");
        assert_eq!(cfg.catalog, CatalogSection::default());
    }

    #[test]
    fn test_saved_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.catalog.exercises = PathBuf::from("/srv/dayfit/exercises.csv");
        save_config_to(&p, &cfg).unwrap();
        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn test_bad_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "[planner\nbaseline_fill = 1").unwrap();
        assert!(load_config_from(&p).is_err());
    }
}
