//! Configuration loading and path resolution.
//!
//! Config files: `skillsurf.toml`, `skillsurf.yaml`, or `skillsurf.json`
//! Searched in `./` then `~/.config/skillsurf/`.
//!
//! Every setting is optional; command-line flags and environment variables
//! take precedence over anything found in a file.

pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, default_skills_dir, discover_and_load, load_config},
    schema::SkillsurfConfig,
};
