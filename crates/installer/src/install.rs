use std::path::{Path, PathBuf};

use skillsurf_config::SkillsurfConfig;

use crate::{
    confirm::OverwriteConfirmer,
    discover::{FsSkillDiscoverer, SkillDiscoverer},
    error::{Error, Result},
    types::{CopyFailure, InstallOutcome, InstallPlan, InstallReport, Skill},
};

/// Resolve the target skills directory.
///
/// Precedence: explicit override (flag or env), config file, then
/// `<home>/.windsurf/skills`.
pub fn resolve_skills_dir(
    override_dir: Option<PathBuf>,
    config: &SkillsurfConfig,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }
    if let Some(dir) = &config.skills_dir {
        return Ok(dir.clone());
    }
    skillsurf_config::default_skills_dir().ok_or_else(|| {
        Error::configuration(
            "could not determine the home directory; pass --skills-dir or set SKILLSURF_SKILLS_DIR",
        )
    })
}

/// Build the plan for one run: discover candidates and detect which of them
/// already have a same-named entry in the skills directory.
pub async fn plan_install(
    discoverer: &dyn SkillDiscoverer,
    skills_dir: &Path,
) -> Result<InstallPlan> {
    let skills = discoverer.discover().await?;
    let preexisting = skills
        .iter()
        .filter(|s| skills_dir.join(&s.name).exists())
        .map(|s| s.name.clone())
        .collect();
    Ok(InstallPlan {
        skills,
        preexisting,
    })
}

/// Run one full installation: validate, plan, confirm, copy.
///
/// Returns `Cancelled` when pre-existing skills were found and the confirmer
/// declined; nothing has been written at that point.
pub async fn run_install(
    source_dir: &Path,
    skills_dir: &Path,
    confirmer: &dyn OverwriteConfirmer,
) -> Result<InstallOutcome> {
    let discoverer = FsSkillDiscoverer::new(source_dir);
    // Sentinel first: a wrong-directory invocation must not touch the
    // filesystem, not even to create an empty skills directory.
    discoverer.ensure_sentinel()?;

    let plan = plan_install(&discoverer, skills_dir).await?;

    if !plan.preexisting.is_empty() && !confirmer.confirm_overwrite(plan.preexisting.len())? {
        return Ok(InstallOutcome::Cancelled {
            preexisting: plan.preexisting.len(),
        });
    }

    tokio::fs::create_dir_all(skills_dir)
        .await
        .map_err(|e| Error::filesystem(format!("creating {}", skills_dir.display()), e))?;

    let report = execute_plan(&plan, skills_dir).await;
    tracing::info!(
        installed = report.installed.len(),
        failed = report.failed.len(),
        dir = %skills_dir.display(),
        "installation finished"
    );
    Ok(InstallOutcome::Completed(report))
}

/// Copy every planned skill, replacing same-named targets in full.
///
/// Copies are independent: one skill failing is recorded and the batch moves
/// on to the remaining skills.
pub async fn execute_plan(plan: &InstallPlan, skills_dir: &Path) -> InstallReport {
    let mut report = InstallReport {
        installed: Vec::new(),
        failed: Vec::new(),
        skills_dir: skills_dir.to_path_buf(),
    };

    for skill in &plan.skills {
        match install_one(skill, skills_dir).await {
            Ok(()) => report.installed.push(skill.name.clone()),
            Err(e) => {
                tracing::warn!(skill = %skill.name, error = %e, "failed to install skill");
                report.failed.push(CopyFailure {
                    name: skill.name.clone(),
                    reason: e.to_string(),
                });
            },
        }
    }

    report
}

/// Replace the target subtree for one skill: remove whatever is there, then
/// copy the source directory. Stale files in an old install disappear.
async fn install_one(skill: &Skill, skills_dir: &Path) -> Result<()> {
    let dest = skills_dir.join(&skill.name);
    match tokio::fs::symlink_metadata(&dest).await {
        Ok(meta) if meta.is_dir() => tokio::fs::remove_dir_all(&dest).await?,
        Ok(_) => tokio::fs::remove_file(&dest).await?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {},
        Err(e) => return Err(e.into()),
    }
    copy_dir_recursive(&skill.path, &dest).await
}

async fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dst).await?;
    let mut entries = tokio::fs::read_dir(src).await?;
    while let Some(entry) = entries.next_entry().await? {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        if src_path.is_dir() {
            Box::pin(copy_dir_recursive(&src_path, &dst_path)).await?;
        } else {
            tokio::fs::copy(&src_path, &dst_path).await?;
        }
    }
    Ok(())
}
