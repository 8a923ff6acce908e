//! Core merge pipeline.
//!
//! ## Stages
//!
//! 1. **Load** ([`columns`]): two-column word lists become locale jobs and
//!    expansion words
//! 2. **Expand** ([`expand`]): base identifiers become identifier pairs
//! 3. **Resolve** ([`resolve`]): source values are looked up per locale
//! 4. **Merge** ([`merge`]): resolved entries are spliced into the target image
//!
//! The core does no printing; diagnostics are returned to the caller.

pub mod columns;
pub mod error;
pub mod expand;
pub mod image;
pub mod merge;
pub mod resolve;
pub mod source;
pub mod types;

pub use columns::{ColumnMismatch, ColumnsError, load_columns, parse_columns};
pub use error::StoreError;
pub use expand::{ExpandError, ExpansionMode, UnknownMode, expand, pair_identifiers};
pub use image::TargetFileImage;
pub use merge::{MergeOptions, MergeOutcome, SortAnchor, merge};
pub use resolve::{Decoration, Resolution, ResolveError, resolve};
pub use source::SourceStore;
pub use types::{IdentifierPair, LocaleJob, ResolvedEntry};
