//! Shared error machinery used across the skillsurf crates.

pub mod error;

pub use error::FromMessage;
