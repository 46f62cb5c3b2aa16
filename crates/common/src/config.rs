//! Command line configuration for the fact renaming tool.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Placeholder prefix written in front of atoms that have no counterpart.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "OLD:";

/// Which diagnostics turn an otherwise completed run into a degraded one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum FailOn {
    /// Diagnostics are warnings only; the run always succeeds once output is written.
    #[default]
    Never,
    /// Unmapped atoms in the rewritten output degrade the run.
    /// Matching conflicts stay warnings.
    Unmapped,
    /// Any recorded diagnostic degrades the run.
    Any,
}

/// Command line arguments for `rename-facts`
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory holding the `*.facts` files to rename
    #[arg(value_name = "SOURCE")]
    pub source_dir: PathBuf,

    /// Directory holding the `*.facts` files whose atom names are adopted
    #[arg(value_name = "REFERENCE")]
    pub reference_dir: PathBuf,

    /// Directory receiving the rewritten `*.facts` files (created if missing)
    #[arg(value_name = "DEST")]
    pub dest_dir: PathBuf,

    /// Additional prefix marking a field as a literal that is never renamed (repeatable)
    #[arg(long = "literal-prefix", value_name = "PREFIX", action = ArgAction::Append)]
    pub literal_prefixes: Vec<String>,

    /// Text written in front of atoms for which no mapping was found
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_PLACEHOLDER_PREFIX)]
    pub placeholder_prefix: String,

    /// Choose which diagnostics make the process exit with a degraded status
    #[arg(long, value_enum, default_value = "never", value_name = "POLICY")]
    pub fail_on: FailOn,

    /// Write a JSON report (mapping and diagnostics) to this file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

impl Config {
    /// Build a configuration with default options for the three directories.
    pub fn new(
        source_dir: impl Into<PathBuf>,
        reference_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            reference_dir: reference_dir.into(),
            dest_dir: dest_dir.into(),
            literal_prefixes: Vec::new(),
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            fail_on: FailOn::default(),
            report: None,
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn reference_dir(&self) -> &Path {
        &self.reference_dir
    }

    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    pub fn literal_prefixes(&self) -> &[String] {
        &self.literal_prefixes
    }

    pub fn placeholder_prefix(&self) -> &str {
        &self.placeholder_prefix
    }

    pub fn fail_on(&self) -> FailOn {
        self.fail_on
    }

    pub fn report_path(&self) -> Option<&Path> {
        self.report.as_deref()
    }
}
