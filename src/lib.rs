//! Langmerge - sorted merging of translated strings into `.lang` files
//!
//! Langmerge reads translated definitions from flat JSON locale files and
//! inserts them, in sorted position, into the `key=value` target file of
//! every supported language. Identifiers can be expanded from a template
//! over word lists (plain words or the sixteen dye colors) so one run writes
//! a whole family of entries.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Load, expand, resolve and merge pipeline
//! - `diagnostics`: Recoverable conditions reported while merging
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod utils;
