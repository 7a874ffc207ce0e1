use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    error::{Error, Result},
    types::Skill,
};

/// Directory-name prefix identifying a skill in the source checkout.
pub const SKILL_PREFIX: &str = "netlify-";

/// Skill that must exist for the source directory to count as a skills
/// checkout at all.
pub const SENTINEL_SKILL: &str = "netlify-creating-sites";

/// Discovers candidate skills from a source directory.
#[async_trait]
pub trait SkillDiscoverer: Send + Sync {
    /// Scan and return all candidate skills, sorted by name.
    async fn discover(&self) -> Result<Vec<Skill>>;
}

/// Default filesystem-based discoverer scanning a single directory.
pub struct FsSkillDiscoverer {
    source_dir: PathBuf,
}

impl FsSkillDiscoverer {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
        }
    }

    /// Fail fast when the sentinel skill is missing. The scan below would
    /// otherwise quietly find nothing when run from an unrelated directory.
    pub fn ensure_sentinel(&self) -> Result<()> {
        if self.source_dir.join(SENTINEL_SKILL).is_dir() {
            return Ok(());
        }
        Err(Error::precondition(format!(
            "{}/ not found in {} — run this from the root of a skills checkout:\n\n  \
             git clone https://github.com/netlify/skills.git\n  \
             cd skills\n  \
             skillsurf install",
            SENTINEL_SKILL,
            self.source_dir.display(),
        )))
    }
}

#[async_trait]
impl SkillDiscoverer for FsSkillDiscoverer {
    async fn discover(&self) -> Result<Vec<Skill>> {
        let mut skills = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.source_dir)
            .await
            .map_err(|e| Error::filesystem(format!("reading {}", self.source_dir.display()), e))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !name.starts_with(SKILL_PREFIX) {
                continue;
            }
            skills.push(Skill {
                name: name.to_string(),
                path,
            });
        }

        // read_dir order is platform-dependent; keep runs reproducible.
        skills.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(skills)
    }
}
