use std::path::PathBuf;

use crate::core::{ExpansionMode, LocaleJob};
use crate::diagnostics::Diagnostic;

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MergeSummary {
    pub mode: ExpansionMode,
    pub locales: Vec<LocaleReport>,
    pub is_apply: bool,
}

impl MergeSummary {
    pub fn inserted_count(&self) -> usize {
        self.locales.iter().map(|l| l.inserted.len()).sum()
    }
}

/// What happened to one target file.
#[derive(Debug)]
pub struct LocaleReport {
    pub job: LocaleJob,
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    /// Definitions in the source file.
    pub definition_count: usize,
    /// Lines in the target file before merging.
    pub target_line_count: usize,
    /// Lines written into the target file, in order.
    pub inserted: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl LocaleReport {
    pub fn duplicate_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateKey { .. }))
            .count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running langmerge commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Diagnostics reported across all locales.
    pub warning_count: usize,
}
