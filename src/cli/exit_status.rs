use std::{error::Error as StdError, fmt, process::ExitCode};

use thiserror::Error;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed
/// - `Failed(kind)`: command aborted with a known failure; the exit byte is
///   the two's complement of the failure code (`-1` exits with 255)
/// - `Error` (2): command failed for any other reason (I/O, `init` errors)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failed(FailureKind),
    Error,
}

impl ExitStatus {
    /// Pick the exit status for an error returned by a command.
    pub fn from_error(err: &anyhow::Error) -> Self {
        err.chain()
            .find_map(|cause| cause.downcast_ref::<Failure>())
            .map_or(ExitStatus::Error, |failure| {
                ExitStatus::Failed(failure.kind)
            })
    }

    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failed(kind) => kind.code(),
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        // Truncation keeps the low byte, which is what the shell sees.
        ExitCode::from(status.code() as u8)
    }
}

/// Every way a merge run can abort, each with its own exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    BadArguments,
    LanguagesList,
    WordList,
    SourceExpansion,
    TargetExpansion,
    SourceStore,
    NoMatches,
    SizeDesync,
    TargetOpen,
    UnknownMode,
    TargetWrite,
    StrictDuplicate,
    Config,
}

impl FailureKind {
    pub const fn code(self) -> i32 {
        match self {
            FailureKind::BadArguments => -1,
            FailureKind::LanguagesList => -2,
            FailureKind::WordList => -3,
            FailureKind::SourceExpansion => -4,
            FailureKind::TargetExpansion => -5,
            FailureKind::SourceStore => -6,
            FailureKind::NoMatches => -7,
            FailureKind::SizeDesync => -8,
            FailureKind::TargetOpen => -9,
            FailureKind::UnknownMode => -10,
            FailureKind::TargetWrite => -11,
            FailureKind::StrictDuplicate => -12,
            FailureKind::Config => -13,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FailureKind::BadArguments => "invalid arguments",
            FailureKind::LanguagesList => "failed to load the languages list",
            FailureKind::WordList => "failed to load the expansion word list",
            FailureKind::SourceExpansion => "failed to expand source identifiers",
            FailureKind::TargetExpansion => "failed to expand target identifiers",
            FailureKind::SourceStore => "failed to load source definitions",
            FailureKind::NoMatches => "aborted; no matching definitions found",
            FailureKind::SizeDesync => "aborted; identifiers and definitions desynchronized",
            FailureKind::TargetOpen => "failed to open target file",
            FailureKind::UnknownMode => "unknown expansion mode",
            FailureKind::TargetWrite => "failed to write target file",
            FailureKind::StrictDuplicate => "aborted; duplicate definitions in strict mode",
            FailureKind::Config => "invalid configuration",
        };
        f.write_str(text)
    }
}

/// An error tagged with the failure it aborts the run with.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Failure {
    pub kind: FailureKind,
    #[source]
    source: Box<dyn StdError + Send + Sync>,
}

impl Failure {
    pub fn new(kind: FailureKind, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}

/// Tag the error of a `Result` with a [`FailureKind`].
pub trait FailWith<T> {
    fn fail_with(self, kind: FailureKind) -> Result<T, Failure>;
}

impl<T, E> FailWith<T> for Result<T, E>
where
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn fail_with(self, kind: FailureKind) -> Result<T, Failure> {
        self.map_err(|source| Failure::new(kind, source))
    }
}
