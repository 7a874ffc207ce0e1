//! Skill installation: discovery, confirmation, and synchronization of
//! Netlify documentation skills into the Windsurf skills directory.
//!
//! Skills are directories named `netlify-*`, each carrying a `SKILL.md`
//! document. Installing replaces the same-named subtree under the target
//! directory in full; nothing is ever merged, and entries whose names match
//! no candidate are left untouched.

pub mod confirm;
pub mod discover;
pub mod error;
pub mod install;
pub mod list;
pub mod parse;
pub mod types;

pub use error::{Error, Result};
