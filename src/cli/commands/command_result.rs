use crate::{
    core::{CatalogCounts, MessageKey, TranslationState},
    issues::Issue,
};

use super::super::exit_status::ExitStatus;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Lookup(LookupSummary),
    Clean(CleanSummary),
    Init(InitSummary),
}

/// Counts of one `.ts` file.
#[derive(Debug, Clone)]
pub struct FileStats {
    pub path: String,
    pub language: Option<String>,
    pub counts: CatalogCounts,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub files: Vec<FileStats>,
    pub total: CatalogCounts,
    pub json: bool,
}

#[derive(Debug)]
pub struct LookupSummary {
    /// The text the application shows.
    pub text: String,
    /// State of the matched message; `None` if no message matched.
    pub state: Option<TranslationState>,
    /// True when `text` comes from the catalog rather than the source fallback.
    pub translated: bool,
}

/// A message `clean` removes.
#[derive(Debug, Clone)]
pub struct RemovedMessage {
    pub key: MessageKey,
    pub state: TranslationState,
    pub line: usize,
}

#[derive(Debug)]
pub struct CleanFile {
    pub path: String,
    pub removed: Vec<RemovedMessage>,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub files: Vec<CleanFile>,
    pub is_apply: bool,
}

impl CleanSummary {
    pub fn removed_count(&self) -> usize {
        self.files.iter().map(|f| f.removed.len()).sum()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running tsglot commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues found by `check`; parse errors only for the other commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of `.ts` files that were loaded (including broken ones).
    pub files_checked: usize,
}

impl CommandResult {
    /// `Failure` when any error-severity issue (including a parse error) was found.
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
