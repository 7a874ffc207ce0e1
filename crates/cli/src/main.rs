use std::path::{Path, PathBuf};

use {
    clap::{Parser, Subcommand},
    skillsurf_config::SkillsurfConfig,
    skillsurf_installer::{
        confirm::{FixedConfirmer, OverwriteConfirmer, StdinConfirmer},
        install::{resolve_skills_dir, run_install},
        list::list_installed,
        types::InstallOutcome,
    },
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

#[derive(Parser)]
#[command(
    name = "skillsurf",
    about = "Install Netlify documentation skills for the Windsurf editor"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, global = true, default_value_t = false)]
    json_logs: bool,

    /// Directory scanned for skills (defaults to the current directory).
    #[arg(long, global = true)]
    source_dir: Option<PathBuf>,

    /// Target skills directory (overrides config and ~/.windsurf/skills).
    #[arg(long, global = true, env = "SKILLSURF_SKILLS_DIR")]
    skills_dir: Option<PathBuf>,

    /// Assume "yes" at the overwrite prompt.
    #[arg(long, global = true, default_value_t = false)]
    yes: bool,

    /// Never prompt; assume "no" at the overwrite prompt.
    #[arg(long, global = true, default_value_t = false)]
    non_interactive: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install all skills from the source directory (default when no
    /// subcommand is provided).
    Install,
    /// List skills currently installed in the skills directory.
    List,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = skillsurf_config::discover_and_load();
    let skills_dir = resolve_skills_dir(cli.skills_dir.clone(), &config)?;
    tracing::debug!(skills_dir = %skills_dir.display(), "resolved skills directory");

    match &cli.command {
        None | Some(Commands::Install) => handle_install(&cli, &config, &skills_dir).await,
        Some(Commands::List) => handle_list(&skills_dir).await,
    }
}

async fn handle_install(
    cli: &Cli,
    config: &SkillsurfConfig,
    skills_dir: &Path,
) -> anyhow::Result<()> {
    let source_dir = cli
        .source_dir
        .clone()
        .or_else(|| config.source_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    // --yes wins when both flags are passed.
    let confirmer: Box<dyn OverwriteConfirmer> = if cli.yes {
        Box::new(FixedConfirmer(true))
    } else if cli.non_interactive {
        Box::new(FixedConfirmer(false))
    } else {
        Box::new(StdinConfirmer)
    };

    println!(
        "Installing Netlify skills for Windsurf ({})",
        std::env::consts::OS
    );

    match run_install(&source_dir, skills_dir, confirmer.as_ref()).await? {
        InstallOutcome::Cancelled { preexisting } => {
            println!("Installation cancelled ({preexisting} existing skill(s) left untouched).");
        },
        InstallOutcome::Completed(report) => {
            for name in &report.installed {
                println!("  ✓ {name}");
            }
            for failure in &report.failed {
                println!("  ✗ {}: {}", failure.name, failure.reason);
            }
            println!("Successfully installed {} skills!", report.installed.len());
            println!("Skills directory: {}", report.skills_dir.display());
            if !report.failed.is_empty() {
                anyhow::bail!(
                    "{} of {} skills failed to install",
                    report.failed.len(),
                    report.installed.len() + report.failed.len()
                );
            }
        },
    }

    Ok(())
}

async fn handle_list(skills_dir: &Path) -> anyhow::Result<()> {
    let skills = list_installed(skills_dir).await?;
    if skills.is_empty() {
        println!("No skills installed.");
        return Ok(());
    }
    for skill in &skills {
        if skill.description.is_empty() {
            println!("  {}", skill.name);
        } else {
            println!("  {} — {}", skill.name, skill.description);
        }
    }
    println!("{} skill(s) in {}", skills.len(), skills_dir.display());
    Ok(())
}
