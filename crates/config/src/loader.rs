use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::SkillsurfConfig;

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "skillsurf.toml",
    "skillsurf.yaml",
    "skillsurf.yml",
    "skillsurf.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<SkillsurfConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./skillsurf.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/skillsurf/skillsurf.{toml,yaml,yml,json}` (user-global)
///
/// Returns `SkillsurfConfig::default()` if no config file is found. A file
/// that fails to parse is reported and skipped rather than aborting the run.
pub fn discover_and_load() -> SkillsurfConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    SkillsurfConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global: ~/.config/skillsurf/
    if let Some(config_dir) = config_dir() {
        for name in CONFIG_FILENAMES {
            let p = config_dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

/// Returns the user-global config directory (`~/.config/skillsurf/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "skillsurf").map(|d| d.config_dir().to_path_buf())
}

/// Default target for installed skills: `<home>/.windsurf/skills`.
///
/// `None` when the home directory cannot be determined from the environment.
pub fn default_skills_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|d| d.home_dir().join(".windsurf").join("skills"))
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<SkillsurfConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillsurf.toml");
        std::fs::write(&path, "skills_dir = \"/tmp/target\"\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.skills_dir, Some(PathBuf::from("/tmp/target")));
        assert!(cfg.source_dir.is_none());
    }

    #[test]
    fn test_load_yaml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillsurf.yaml");
        std::fs::write(&path, "skills_dir: /tmp/target\nsource_dir: /checkout\n").unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.skills_dir, Some(PathBuf::from("/tmp/target")));
        assert_eq!(cfg.source_dir, Some(PathBuf::from("/checkout")));
    }

    #[test]
    fn test_load_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillsurf.json");
        std::fs::write(&path, r#"{"skills_dir": "/tmp/target"}"#).unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.skills_dir, Some(PathBuf::from("/tmp/target")));
    }

    #[test]
    fn test_unsupported_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("skillsurf.ini");
        std::fs::write(&path, "skills_dir=/tmp\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(load_config(Path::new("/nonexistent/skillsurf.toml")).is_err());
    }

    #[test]
    fn test_default_skills_dir_under_home() {
        // Home is always resolvable in the test environment.
        let dir = default_skills_dir().unwrap();
        assert!(dir.ends_with(".windsurf/skills"));
    }
}
