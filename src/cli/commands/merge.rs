//! The `merge` command: resolve definitions per locale and splice them into
//! every target file.
//!
//! Locales are processed in the order of the languages list. The first
//! fatal failure aborts the run; target files written before it are kept.

use std::{env, path::Path};

use anyhow::{Context, Result};

use super::super::{
    args::MergeCommand,
    exit_status::{FailWith, Failure, FailureKind},
    report,
};
use super::{CommandResult, CommandSummary, LocaleReport, MergeSummary};
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    core::{
        Decoration, ExpansionMode, IdentifierPair, LocaleJob, MergeOptions, SortAnchor,
        SourceStore, TargetFileImage, expand, load_columns, merge as merge_entries,
        pair_identifiers, resolve,
    },
    utils::replace_first,
};

/// Sentinel that disables an optional positional argument.
const NULL_ARGUMENT: &str = "NULL";

/// Everything shared by the per-locale jobs of one run.
struct MergePlan<'a> {
    config: &'a Config,
    root: &'a Path,
    pairs: Vec<IdentifierPair>,
    decoration: Decoration,
    anchor: SortAnchor,
}

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let mode: ExpansionMode = cmd.mode.parse().fail_with(FailureKind::UnknownMode)?;
    let verbose = cmd.common.verbose;

    let start_dir = match &cmd.common.root {
        Some(root) => root.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let ConfigLoadResult {
        mut config,
        from_file,
        root,
    } = load_config(&start_dir).fail_with(FailureKind::Config)?;
    if let Some(locale) = &cmd.common.default_locale {
        config.default_locale = locale.clone();
    }

    let prefix = optional(cmd.prefix).map(|text| with_section_char(&text, &config));
    let suffix = optional(cmd.suffix).map(|text| with_section_char(&text, &config));
    let sort_override = optional(cmd.sort_override);

    report::print_settings(
        &report::Settings {
            mode,
            source_id: &cmd.source_id,
            target_id: &cmd.target_id,
            prefix: prefix.as_deref(),
            suffix: suffix.as_deref(),
            sort_override: sort_override.as_deref(),
            config_from_file: from_file,
            root: &root,
        },
        verbose,
    );

    let jobs: Vec<LocaleJob> = load_columns(&root.join(&config.languages_file))
        .fail_with(FailureKind::LanguagesList)?
        .into_iter()
        .map(LocaleJob::from)
        .collect();

    let pairs = expand_identifiers(mode, &cmd.source_id, &cmd.target_id, &config, &root)?;
    if mode.expands() {
        report::print_identifiers(&pairs, verbose);
    }

    let anchor = match sort_override {
        Some(text) => SortAnchor::Override(text),
        None => SortAnchor::derive(
            &cmd.target_id,
            mode.expands().then_some(config.placeholder.as_str()),
        ),
    };

    let plan = MergePlan {
        config: &config,
        root: &root,
        pairs,
        decoration: Decoration::new(prefix.unwrap_or_default(), suffix.unwrap_or_default()),
        anchor,
    };

    let mut locales = Vec::with_capacity(jobs.len());
    for job in jobs {
        let (locale, image) = merge_locale(job, &plan)?;
        report::print_locale(&locale, !cmd.dry_run, verbose);

        let duplicates = locale.duplicate_count();
        if cmd.strict && duplicates > 0 {
            return Err(Failure::new(
                FailureKind::StrictDuplicate,
                format!(
                    "{} duplicate definition(s) in {}",
                    duplicates,
                    locale.target_path.display()
                ),
            )
            .into());
        }

        if !cmd.dry_run {
            image
                .write_atomic(&locale.target_path)
                .fail_with(FailureKind::TargetWrite)?;
            report::print_written(&locale.target_path, verbose);
        }
        locales.push(locale);
    }

    let warning_count = locales.iter().map(|l| l.diagnostics.len()).sum();
    Ok(CommandResult {
        summary: CommandSummary::Merge(MergeSummary {
            mode,
            locales,
            is_apply: !cmd.dry_run,
        }),
        warning_count,
    })
}

/// Resolve, read and merge one locale. Nothing is written here.
fn merge_locale(job: LocaleJob, plan: &MergePlan<'_>) -> Result<(LocaleReport, TargetFileImage)> {
    let source_path = plan.config.source_path(plan.root, &job.source_locale);
    let store = SourceStore::open(&source_path).fail_with(FailureKind::SourceStore)?;

    let resolution = resolve(&store, &plan.pairs, &plan.decoration).map_err(|err| {
        Failure::new(
            FailureKind::NoMatches,
            format!("{} ({})", err, store.file_path().display()),
        )
    })?;

    let target_path = plan.config.target_path(plan.root, &job.target_locale);
    let image = TargetFileImage::read(&target_path).fail_with(FailureKind::TargetOpen)?;

    let options = MergeOptions::new(plan.anchor.clone());
    let options = if job.target_locale == plan.config.default_locale {
        options
    } else {
        options.with_annotation(plan.config.annotation.as_str())
    };
    let outcome = merge_entries(&image, &resolution.entries, &options);

    let inserted = outcome.inserted_lines().to_vec();
    let mut diagnostics = resolution.diagnostics;
    diagnostics.extend(outcome.diagnostics);

    Ok((
        LocaleReport {
            job,
            source_path: store.file_path().to_path_buf(),
            target_path,
            definition_count: store.len(),
            target_line_count: image.len(),
            inserted,
            diagnostics,
        },
        outcome.image,
    ))
}

/// Expand the base identifiers into source/target pairs.
///
/// Single mode yields exactly one pair and reads no word list.
fn expand_identifiers(
    mode: ExpansionMode,
    source_id: &str,
    target_id: &str,
    config: &Config,
    root: &Path,
) -> Result<Vec<IdentifierPair>> {
    let Some(word_list) = config.word_list(mode) else {
        return Ok(vec![IdentifierPair::new(source_id, target_id)]);
    };

    let (source_words, target_words): (Vec<String>, Vec<String>) =
        load_columns(&root.join(word_list))
            .fail_with(FailureKind::WordList)?
            .into_iter()
            .unzip();

    let sources = expand(source_id, &config.placeholder, &source_words)
        .fail_with(FailureKind::SourceExpansion)?;
    let targets = expand(target_id, &config.placeholder, &target_words)
        .fail_with(FailureKind::TargetExpansion)?;

    Ok(pair_identifiers(sources, targets).fail_with(FailureKind::SizeDesync)?)
}

/// `None` for an absent, empty or `NULL` argument.
fn optional(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty() && text != NULL_ARGUMENT)
}

fn with_section_char(text: &str, config: &Config) -> String {
    replace_first(text, &config.section_token, &config.section_char)
        .unwrap_or_else(|| text.to_string())
}
