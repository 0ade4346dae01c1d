use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicate::check_duplicate_issues, empty::check_empty_issues,
        numerus::check_numerus_issues, placeholder::check_placeholder_issues,
        unfinished::check_unfinished_issues, untranslated::check_untranslated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Duplicate,
    Placeholder,
    Numerus,
    Unfinished,
    Empty,
    Untranslated,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Duplicate,
            CheckRule::Placeholder,
            CheckRule::Numerus,
            CheckRule::Unfinished,
            CheckRule::Empty,
            CheckRule::Untranslated,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules.clone()
    };

    Ok(finish(
        CommandSummary::Check,
        run_rules(&ctx, &rules),
        ctx.files_checked(),
    ))
}

/// Run the selected rules. Parse errors are always included.
pub fn run_rules(ctx: &CheckContext, rules: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Numerus => {
                let issues = check_numerus_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Numerus));
            }
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Empty => {
                let issues = check_empty_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Empty));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
        }
    }

    all_issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));
    all_issues
}
