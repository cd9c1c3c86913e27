//! Schema-key construction and text resolution.
//!
//! This module turns a (container name, field name, optional value,
//! rendering context) tuple into a dotted dictionary key and resolves it
//! against a [`TranslationStore`](crate::store::TranslationStore) in two
//! stages: the plain key first, then its `_html` rich-text variant. A miss
//! at both stages is an ordinary `None`, not an error.

mod context;
mod error;
mod key;
mod resolve;
mod roots;
mod scope;

pub use context::TextContext;
pub use error::ConfigError;
pub use key::SchemaKey;
pub use resolve::{LocalizedText, TextResolver};
pub use roots::SchemaRoots;
pub use scope::{CONTEXT_PLACEHOLDER, Scope, ScopeSegment};
