use anyhow::{Ok, Result, bail};
use tracing::debug;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::core::{Translator, parsers::parse_ts_file, plural::PluralRule};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let catalog = parse_ts_file(&args.file)?;

    let mut translator = Translator::new(catalog);
    if let Some(language) = &args.language {
        let Some(rule) = PluralRule::for_language(language) else {
            bail!("Unknown language: \"{}\"", language);
        };
        translator = translator.with_plural_rule(rule);
    }
    debug!(
        language = ?translator.language(),
        rule = ?translator.plural_rule(),
        messages = translator.len(),
        "catalog loaded"
    );

    let summary = resolve(
        &translator,
        &args.context,
        &args.source,
        args.comment.as_deref(),
        args.count,
    );

    Ok(finish(CommandSummary::Lookup(summary), Vec::new(), 1))
}

pub fn resolve(
    translator: &Translator,
    context: &str,
    source: &str,
    comment: Option<&str>,
    n: Option<i64>,
) -> LookupSummary {
    let state = translator
        .lookup(context, source, comment)
        .map(|message| message.state());

    match translator.try_translate(context, source, comment, n) {
        Some(text) => LookupSummary {
            text,
            state,
            translated: true,
        },
        None => LookupSummary {
            text: translator.translate(context, source, comment, n),
            state,
            translated: false,
        },
    }
}
