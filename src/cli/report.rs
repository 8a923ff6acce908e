//! Report formatting and printing utilities.
//!
//! Progress goes to stdout, diagnostics to stderr in cargo style. Kept apart
//! from the core so langmerge can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, LocaleReport, MergeSummary};
use crate::core::{ExpansionMode, IdentifierPair};
use crate::diagnostics::{Diagnostic, Rule};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prefix of each previewed line in dry-run output.
const PREVIEW_MARK: &str = "+";

/// User-supplied settings echoed in verbose mode.
pub struct Settings<'a> {
    pub mode: ExpansionMode,
    pub source_id: &'a str,
    pub target_id: &'a str,
    pub prefix: Option<&'a str>,
    pub suffix: Option<&'a str>,
    pub sort_override: Option<&'a str>,
    pub config_from_file: bool,
    pub root: &'a Path,
}

pub fn print_settings(settings: &Settings<'_>, verbose: bool) {
    if verbose {
        print_settings_to(settings, &mut io::stdout().lock());
    }
}

pub fn print_settings_to<W: Write>(settings: &Settings<'_>, writer: &mut W) {
    let none = "(none)".dimmed();
    let show = |value: Option<&str>| value.map_or_else(|| none.to_string(), str::to_string);

    let _ = writeln!(writer, "{}", "Settings:".bold());
    let _ = writeln!(writer, "  mode:          {}", settings.mode);
    let _ = writeln!(writer, "  source id:     {}", settings.source_id);
    let _ = writeln!(writer, "  target id:     {}", settings.target_id);
    let _ = writeln!(writer, "  prefix:        {}", show(settings.prefix));
    let _ = writeln!(writer, "  suffix:        {}", show(settings.suffix));
    let _ = writeln!(writer, "  sort override: {}", show(settings.sort_override));
    let _ = writeln!(
        writer,
        "  config:        {}",
        if settings.config_from_file {
            "from file"
        } else {
            "defaults"
        }
    );
    let _ = writeln!(writer, "  root:          {}", settings.root.display());
    let _ = writeln!(writer);
}

pub fn print_identifiers(pairs: &[IdentifierPair], verbose: bool) {
    if verbose {
        print_identifiers_to(pairs, &mut io::stdout().lock());
    }
}

pub fn print_identifiers_to<W: Write>(pairs: &[IdentifierPair], writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} identifier pair(s):",
        "Expanded".bold(),
        pairs.len()
    );
    for pair in pairs {
        let _ = writeln!(
            writer,
            "  {} -> {}",
            pair.source_identifier, pair.target_identifier
        );
    }
    let _ = writeln!(writer);
}

/// Print the outcome of one locale: diagnostics to stderr, and in dry-run
/// mode a preview of the lines that would be written.
pub fn print_locale(locale: &LocaleReport, is_apply: bool, verbose: bool) {
    print_diagnostics_to(locale, &mut io::stderr().lock());

    let mut out = io::stdout().lock();
    if verbose {
        print_locale_progress_to(locale, &mut out);
    }
    if !is_apply {
        print_preview_to(locale, &mut out);
    }
}

/// One progress line per locale: which files were read and how big they were.
pub fn print_locale_progress_to<W: Write>(locale: &LocaleReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} -> {} ({} definition(s) read from {}, {} line(s) in {})",
        "Merged".bold(),
        locale.job.source_locale,
        locale.job.target_locale,
        locale.definition_count,
        locale.source_path.display(),
        locale.target_line_count,
        locale.target_path.display()
    );
}

pub fn print_written(path: &Path, verbose: bool) {
    if verbose {
        println!("{} {}", "Wrote".green().bold(), path.display());
    }
}

/// Print the diagnostics of one locale in cargo style.
pub fn print_diagnostics_to<W: Write>(locale: &LocaleReport, writer: &mut W) {
    for diagnostic in &locale.diagnostics {
        let _ = writeln!(
            writer,
            "{} \"{}\"  {}",
            "warning:".bold().yellow(),
            diagnostic.message(),
            diagnostic.rule().to_string().dimmed().cyan()
        );

        let path = match diagnostic.rule() {
            Rule::MissingSourceKey => &locale.source_path,
            _ => &locale.target_path,
        };
        match diagnostic.line() {
            Some(line) => {
                let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), path.display(), line);
            }
            None => {
                let _ = writeln!(writer, "  {} {}", "-->".blue(), path.display());
            }
        }

        if let Diagnostic::SkippedEntry { .. } = diagnostic {
            let _ = writeln!(
                writer,
                "   {} {} {}",
                "=".blue(),
                "note:".bold(),
                "entries without a definition are never written"
            );
        }
    }
}

/// Print the lines a dry run would insert into one target file.
pub fn print_preview_to<W: Write>(locale: &LocaleReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} line(s) into {}:",
        "Would insert".yellow().bold(),
        locale.inserted.len(),
        locale.target_path.display()
    );
    for line in &locale.inserted {
        let _ = writeln!(
            writer,
            "  {} {}",
            PREVIEW_MARK.green(),
            line.escape_debug().to_string().green()
        );
    }
}

pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge(summary, result.warning_count, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_merge<W: Write>(summary: &MergeSummary, warning_count: usize, writer: &mut W) {
    let file_count = summary.locales.len();
    let inserted = summary.inserted_count();

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Merged {} line(s) into {} {} ({} mode)",
                inserted,
                file_count,
                if file_count == 1 { "file" } else { "files" },
                summary.mode
            )
            .green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} line(s) in {} {}.",
            "Would insert".yellow().bold(),
            inserted,
            file_count,
            if file_count == 1 { "file" } else { "files" }
        );
        let _ = writeln!(
            writer,
            "Run without {} to write these lines.",
            "--dry-run".cyan()
        );
    }

    if warning_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {}",
            FAILURE_MARK.yellow(),
            warning_count,
            if warning_count == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }

    if summary.is_apply {
        let _ = writeln!(writer, "Task completed successfully!");
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
