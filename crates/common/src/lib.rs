//! Shared configuration for the fact renaming tools.

pub mod config;

pub use config::{Config, FailOn, DEFAULT_PLACEHOLDER_PREFIX};
