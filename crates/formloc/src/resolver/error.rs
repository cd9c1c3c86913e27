//! Configuration errors.

use thiserror::Error;

/// Errors raised while building localization configuration.
///
/// Configuration problems are rejected when the configuration is
/// constructed, never during a lookup. Missing translations are ordinary
/// `None` results, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A scope string contained no segments at all.
    #[error("schema scope is empty")]
    EmptyScope,

    /// A dotted scope string contained an empty segment, e.g. `a..b`.
    #[error("schema scope '{scope}' contains an empty segment")]
    EmptySegment { scope: String },

    /// A context name other than label, hint, legend, or caption.
    #[error("unknown text context '{name}'")]
    UnknownContext { name: String },
}
