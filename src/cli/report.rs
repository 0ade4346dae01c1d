//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{CatalogCounts, TranslationState};
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::{pad_to_width, pluralize, truncate_to_width};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Longest source text shown in an issue headline.
const MAX_MESSAGE_WIDTH: usize = 80;

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            pluralize(files, "translation file", "translation files")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let message = match loc {
        ReportLocation::Message(_) => {
            format!("\"{}\"", truncate_to_width(&issue.message(), MAX_MESSAGE_WIDTH))
        }
        ReportLocation::File { .. } => issue.message(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        message,
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let ReportLocation::Message(ctx) = loc {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "context:".bold(),
            ctx.context,
            width = max_line_width
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    // Print hint if present
    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize) {
    match loc {
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line()),
        ReportLocation::File { path } => (path, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.files_checked);
            }
        }
        CommandSummary::Stats(summary) => {
            print_stats_to(summary, &mut io::stdout().lock());
            print_parse_warning(result.parse_error_count, verbose);
        }
        CommandSummary::Lookup(summary) => {
            print_lookup(summary);
        }
        CommandSummary::Clean(summary) => {
            print_clean(summary);
            print_parse_warning(result.parse_error_count, verbose);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

// ============================================================
// Stats
// ============================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
    contexts: usize,
    messages: usize,
    finished: usize,
    unfinished: usize,
    obsolete: usize,
    numerus: usize,
    /// Percent, one decimal.
    completion: f64,
}

impl<'a> StatsEntry<'a> {
    fn new(path: Option<&'a str>, language: Option<&'a str>, counts: &CatalogCounts) -> Self {
        Self {
            path,
            language,
            contexts: counts.contexts,
            messages: counts.messages,
            finished: counts.finished,
            unfinished: counts.unfinished,
            obsolete: counts.obsolete,
            numerus: counts.numerus,
            completion: (counts.completion() * 10.0).round() / 10.0,
        }
    }
}

#[derive(Serialize)]
struct StatsReport<'a> {
    files: Vec<StatsEntry<'a>>,
    total: StatsEntry<'a>,
}

/// Print per-file progress as a table, or as JSON with `--json`.
pub fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.json {
        let report = StatsReport {
            files: summary
                .files
                .iter()
                .map(|f| StatsEntry::new(Some(&f.path), f.language.as_deref(), &f.counts))
                .collect(),
            total: StatsEntry::new(None, None, &summary.total),
        };
        let _ = serde_json::to_writer_pretty(&mut *writer, &report);
        let _ = writeln!(writer);
        return;
    }

    let path_width = summary
        .files
        .iter()
        .map(|f| f.path.width())
        .chain([4, 5])
        .max()
        .unwrap_or(5);
    let lang_width = summary
        .files
        .iter()
        .filter_map(|f| f.language.as_deref().map(UnicodeWidthStr::width))
        .chain([8])
        .max()
        .unwrap_or(8);

    let header = format!(
        "{}  {}  {:>8}  {:>8}  {:>10}  {:>8}  {:>7}",
        pad_to_width("File", path_width),
        pad_to_width("Language", lang_width),
        "Messages",
        "Finished",
        "Unfinished",
        "Obsolete",
        "Done"
    );
    let _ = writeln!(writer, "{}", header.bold());

    for file in &summary.files {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            pad_to_width(&file.path, path_width),
            pad_to_width(file.language.as_deref().unwrap_or("-"), lang_width),
            format_counts(&file.counts)
        );
    }

    if summary.files.len() > 1 {
        let _ = writeln!(
            writer,
            "{}  {}  {}",
            pad_to_width("Total", path_width).bold(),
            pad_to_width("", lang_width),
            format_counts(&summary.total)
        );
    }
}

fn format_counts(counts: &CatalogCounts) -> String {
    let completion = format!("{:.1}%", counts.completion());
    let completion = if counts.unfinished == 0 {
        completion.green()
    } else {
        completion.yellow()
    };
    format!(
        "{:>8}  {:>8}  {:>10}  {:>8}  {:>7}",
        counts.messages, counts.finished, counts.unfinished, counts.obsolete, completion
    )
}

// ============================================================
// Lookup, Clean, Init
// ============================================================

fn print_lookup(summary: &LookupSummary) {
    println!("{}", summary.text);

    if !summary.translated {
        let reason = match summary.state {
            None => "no such message",
            Some(TranslationState::Finished) => "translation is empty",
            Some(TranslationState::Unfinished) => "translation is unfinished",
            Some(TranslationState::Vanished | TranslationState::Obsolete) => {
                "message is no longer in use"
            }
        };
        eprintln!(
            "{} {}, showing the source text",
            "note:".bold(),
            reason
        );
    }
}

fn print_clean(summary: &CleanSummary) {
    let total = summary.removed_count();
    if total == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No vanished or obsolete messages found".green()
        );
        return;
    }

    if !summary.is_apply {
        for file in &summary.files {
            for removed in &file.removed {
                println!(
                    "  {} {}:{}  {} ({})",
                    "-".red(),
                    file.path,
                    removed.line,
                    removed.key,
                    removed.state
                );
            }
        }
        println!();
    }

    let messages = pluralize(total, "message", "messages");
    let files = pluralize(summary.files.len(), "file", "files");
    if summary.is_apply {
        println!("{} {} in {}.", "Removed".green().bold(), messages, files);
    } else {
        println!("{} {} in {}.", "Would remove".yellow().bold(), messages, files);
        println!("Run with {} to rewrite these files.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
