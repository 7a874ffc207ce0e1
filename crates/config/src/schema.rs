use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration. Every field is optional; CLI flags override all of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsurfConfig {
    /// Target directory for installed skills.
    /// Defaults to `<home>/.windsurf/skills` when unset.
    #[serde(default)]
    pub skills_dir: Option<PathBuf>,
    /// Directory scanned for skills. Defaults to the current directory.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,
}
