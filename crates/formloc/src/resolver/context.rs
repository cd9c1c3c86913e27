//! Rendering contexts for form text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::resolver::error::ConfigError;

/// The kind of form text being resolved.
///
/// Each context can carry its own dictionary scope in
/// [`SchemaRoots`](crate::SchemaRoots), and the context name is what
/// replaces the `__context__` placeholder inside a scope. Absence of a
/// context is modeled as `Option<TextContext>`, not as a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextContext {
    /// A field label.
    Label,
    /// Supporting hint text shown below a label.
    Hint,
    /// A fieldset legend.
    Legend,
    /// A caption displayed above a label or legend.
    Caption,
}

impl TextContext {
    /// The lowercase name used inside schema keys.
    pub fn as_str(self) -> &'static str {
        match self {
            TextContext::Label => "label",
            TextContext::Hint => "hint",
            TextContext::Legend => "legend",
            TextContext::Caption => "caption",
        }
    }
}

impl std::fmt::Display for TextContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextContext {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s {
            "label" => Ok(TextContext::Label),
            "hint" => Ok(TextContext::Hint),
            "legend" => Ok(TextContext::Legend),
            "caption" => Ok(TextContext::Caption),
            other => Err(ConfigError::UnknownContext {
                name: other.to_string(),
            }),
        }
    }
}
