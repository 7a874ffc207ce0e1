use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A candidate skill directory discovered in the source checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Directory base name, e.g. `netlify-forms`.
    pub name: String,
    /// Path to the skill directory.
    pub path: PathBuf,
}

/// Lightweight display metadata parsed from a skill's SKILL.md frontmatter.
///
/// Display-only: parsing problems never affect installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Everything known about a run before any copy happens.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// Candidate skills, lexicographically ordered by name.
    pub skills: Vec<Skill>,
    /// Candidate names already present in the skills directory.
    pub preexisting: Vec<String>,
}

/// One skill that could not be copied.
#[derive(Debug, Clone)]
pub struct CopyFailure {
    pub name: String,
    pub reason: String,
}

/// Result of the copy phase.
#[derive(Debug, Clone)]
pub struct InstallReport {
    /// Names copied successfully, in install order.
    pub installed: Vec<String>,
    /// Skills that failed to copy; the run continued past them.
    pub failed: Vec<CopyFailure>,
    /// Resolved target directory.
    pub skills_dir: PathBuf,
}

/// Terminal state of one installation run.
#[derive(Debug, Clone)]
pub enum InstallOutcome {
    /// The copy phase ran; see the report for per-skill results.
    Completed(InstallReport),
    /// The user declined to overwrite pre-existing skills. Nothing was copied.
    Cancelled {
        /// How many same-named skills were already installed.
        preexisting: usize,
    },
}
