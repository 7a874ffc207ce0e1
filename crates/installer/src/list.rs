use std::path::Path;

use crate::{
    error::{Context as _, Result},
    parse,
    types::SkillInfo,
};

/// Enumerate the skills currently present in the skills directory, sorted by
/// name. A missing directory is an empty list, not an error.
pub async fn list_installed(skills_dir: &Path) -> Result<Vec<SkillInfo>> {
    if !skills_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut infos = Vec::new();
    let mut entries = tokio::fs::read_dir(skills_dir)
        .await
        .with_context(|| format!("reading {}", skills_dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        infos.push(parse::read_info(&path, name));
    }

    infos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(infos)
}
