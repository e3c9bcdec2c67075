//! Load-boundary errors
//!
//! Only whole-manifest failures are typed: a single track that fails to fetch
//! or parse is dropped from the set at the loader with a log line, never
//! surfaced as an error. All variants carry owned strings so results can be
//! cloned through the UI message channel.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Manifest fetch failed (missing file, unreadable, etc.).
    #[error("manifest unavailable: {0}")]
    ManifestUnavailable(String),

    /// Manifest is not JSON or lacks a usable `files` sequence.
    #[error("manifest malformed: {0}")]
    ManifestMalformed(String),

    /// Manifest parsed but listed zero usable track files.
    #[error("manifest lists no usable track files")]
    NoValidEntries,
}
