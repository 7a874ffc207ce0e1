use std::path::Path;

use serde::Deserialize;

use crate::types::SkillInfo;

/// Frontmatter fields recognized for display. Everything else is ignored.
#[derive(Debug, Default, Deserialize)]
struct Frontmatter {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Best-effort display info for a skill directory.
///
/// Falls back to the directory name and an empty description when SKILL.md
/// is missing or its frontmatter does not parse. Display must never make a
/// skill unlistable.
pub fn read_info(skill_dir: &Path, dir_name: &str) -> SkillInfo {
    let fallback = SkillInfo {
        name: dir_name.to_string(),
        description: String::new(),
    };
    let Ok(content) = std::fs::read_to_string(skill_dir.join("SKILL.md")) else {
        return fallback;
    };
    match parse_frontmatter(&content) {
        Some(fm) => SkillInfo {
            name: fm.name.unwrap_or_else(|| dir_name.to_string()),
            description: fm.description.unwrap_or_default(),
        },
        None => fallback,
    }
}

fn parse_frontmatter(content: &str) -> Option<Frontmatter> {
    let (frontmatter, _body) = split_frontmatter(content)?;
    serde_yaml::from_str(frontmatter).ok()
}

/// Split SKILL.md content at `---` delimiters into (frontmatter, body).
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let trimmed = content.trim_start();
    let after_open = trimmed.strip_prefix("---")?;
    let close = after_open.find("\n---")?;
    Some((after_open[..close].trim(), after_open[close + 4..].trim()))
}
