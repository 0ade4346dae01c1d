use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use tracing::debug;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning the translations directory.
pub struct ScanResult {
    /// `.ts` files, sorted by path.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Collect all `.ts` files below `base_dir`, minus the ignored ones.
pub fn scan_translation_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            debug!(path = %path_str, "ignored by literal path");
            continue;
        }

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            debug!(path = %path_str, "ignored by glob pattern");
            continue;
        }

        if path.is_file() && is_translation_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}

fn is_translation_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ts")
}

/// Extract the locale from a Qt-style file name: `otter-browser_ru.ts` -> `ru`,
/// `app_pt_BR.ts` -> `pt_BR`.
pub fn locale_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let parts: Vec<&str> = stem.split('_').collect();
    match parts.as_slice() {
        [.., lang, region]
            if lang.len() <= 3
                && lang.chars().all(|c| c.is_ascii_lowercase())
                && region.len() == 2
                && region.chars().all(|c| c.is_ascii_uppercase()) =>
        {
            Some(format!("{}_{}", lang, region))
        }
        [_, .., lang] if lang.chars().all(|c| c.is_ascii_lowercase()) && lang.len() <= 3 => {
            Some(lang.to_string())
        }
        [only] if only.chars().all(|c| c.is_ascii_lowercase()) && only.len() <= 3 => {
            Some(only.to_string())
        }
        _ => None,
    }
}
