use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;
use tracing::debug;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        Catalog, Context, Message, MessageContext, MessageLocation,
        parsers::parse_ts_file,
        plural::PluralRule,
        scanner::{locale_from_file_name, scan_translation_files},
    },
    issues::ParseErrorIssue,
};

/// A parsed `.ts` file.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Path as found by the scanner (e.g., "./translations/app_ru.ts").
    pub path: String,
    /// Effective target language: CLI/config override, then the `language`
    /// attribute, then the file name.
    pub language: Option<String>,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    pub fn new(path: impl Into<String>, catalog: Catalog, language_override: Option<&str>) -> Self {
        let path = path.into();
        let language = language_override
            .map(str::to_string)
            .or_else(|| catalog.language.clone())
            .or_else(|| locale_from_file_name(Path::new(&path)));
        Self {
            path,
            language,
            catalog,
        }
    }

    /// Plural rule of the target language, `None` if the language is unknown.
    pub fn plural_rule(&self) -> Option<PluralRule> {
        self.language.as_deref().and_then(PluralRule::for_language)
    }

    /// Report context for a message of this file.
    pub fn message_context(&self, context: &Context, message: &Message) -> MessageContext {
        MessageContext::new(
            MessageLocation::new(&self.path, message.line),
            &context.name,
            &message.source,
            message.display_translation(),
        )
    }
}

/// The loaded project shared by every command.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--language ru`)
/// 2. `.tsglotrc.json` config file
/// 3. Built-in defaults
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (where the config search started).
    pub root_dir: PathBuf,

    /// Directory scanned for `.ts` files.
    pub translations_dir: PathBuf,

    /// Contexts skipped by every rule (from config `ignoreContexts`).
    pub ignore_contexts: HashSet<String>,

    pub verbose: bool,

    /// Successfully parsed catalogs, sorted by path.
    pub catalogs: Vec<LoadedCatalog>,

    /// Files that could not be read or parsed.
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Load configuration, scan the translations directory and parse every `.ts` file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Config file is invalid
    /// - The translations directory doesn't exist
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args.path.clone();

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!("Note: No .tsglotrc.json found, using default configuration");
        }

        let mut config = config_result.config;

        if let Some(ref translations_root) = common_args.translations_root {
            config.translations_root = translations_root.to_string_lossy().to_string();
        }
        if let Some(ref language) = common_args.language {
            config.language = Some(language.clone());
        }
        config.validate()?;

        let translations_dir = resolve_dir(&root_dir, &config.translations_root);
        if !translations_dir.is_dir() {
            bail!(
                "Translations directory not found: {}",
                translations_dir.display()
            );
        }

        let scan_result = scan_translation_files(&translations_dir, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }
        debug!(
            dir = %translations_dir.display(),
            files = scan_result.files.len(),
            "scanned translations directory"
        );

        let (catalogs, parse_errors) =
            load_catalogs(&scan_result.files, config.language.as_deref(), verbose);

        let ignore_contexts = config.ignore_contexts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            translations_dir,
            ignore_contexts,
            verbose,
            catalogs,
            parse_errors,
        })
    }

    /// Number of `.ts` files found, including those that failed to parse.
    pub fn files_checked(&self) -> usize {
        self.catalogs.len() + self.parse_errors.len()
    }
}

/// Parse all files in parallel. Order of `files` is kept.
fn load_catalogs(
    files: &[PathBuf],
    language_override: Option<&str>,
    verbose: bool,
) -> (Vec<LoadedCatalog>, Vec<ParseErrorIssue>) {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path.to_string_lossy().to_string(), parse_ts_file(path)))
        .collect();

    let mut catalogs = Vec::new();
    let mut errors = Vec::new();
    for (path, result) in results {
        match result {
            Ok(catalog) => catalogs.push(LoadedCatalog::new(path, catalog, language_override)),
            Err(e) => {
                let error = format!("{:#}", e);
                if verbose {
                    eprintln!("{} {} - {}", "warning:".bold().yellow(), path, error);
                }
                errors.push(ParseErrorIssue {
                    file_path: path,
                    error,
                });
            }
        }
    }
    (catalogs, errors)
}

/// Join a configured directory onto the project root, keeping `./x` relative
/// when the root is the current directory.
fn resolve_dir(root_dir: &Path, dir: &str) -> PathBuf {
    let p = Path::new(dir);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
