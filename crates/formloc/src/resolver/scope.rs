//! Dictionary scope prefixes.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::resolver::error::ConfigError;

/// The scope segment replaced by the rendering-context name at
/// key-assembly time.
pub const CONTEXT_PLACEHOLDER: &str = "__context__";

/// One segment of a dictionary scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSegment {
    /// A literal key segment.
    Literal(String),
    /// Stands in for the rendering-context name (`label`, `hint`, ...).
    Context,
}

impl fmt::Display for ScopeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeSegment::Literal(text) => f.write_str(text),
            ScopeSegment::Context => f.write_str(CONTEXT_PLACEHOLDER),
        }
    }
}

/// A dictionary scope prefix, e.g. `helpers.label` or
/// `helpers.__context__`.
///
/// Scopes are parsed from dotted strings and are immutable afterwards. The
/// segment `__context__` marks where the rendering-context name is
/// substituted when a schema key is assembled. Serializes as the dotted
/// string.
///
/// # Example
///
/// ```
/// use formloc::{Scope, ScopeSegment};
///
/// let scope: Scope = "helpers.__context__".parse().unwrap();
/// assert_eq!(scope.segments().len(), 2);
/// assert_eq!(scope.segments()[1], ScopeSegment::Context);
/// assert_eq!(scope.to_string(), "helpers.__context__");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    segments: Vec<ScopeSegment>,
}

impl Scope {
    /// Build a scope from pre-split segments.
    ///
    /// Returns [`ConfigError::EmptyScope`] when `segments` is empty.
    pub fn new(segments: Vec<ScopeSegment>) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptyScope);
        }
        Ok(Self { segments })
    }

    /// The scope's segments in order.
    pub fn segments(&self) -> &[ScopeSegment] {
        &self.segments
    }
}

impl FromStr for Scope {
    type Err = ConfigError;

    /// Parse a dotted scope string such as `helpers.__context__`.
    ///
    /// An empty string or an empty segment (`a..b`) is rejected.
    fn from_str(s: &str) -> Result<Self, ConfigError> {
        if s.is_empty() {
            return Err(ConfigError::EmptyScope);
        }

        let mut segments = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(ConfigError::EmptySegment {
                    scope: s.to_string(),
                });
            }
            segments.push(if part == CONTEXT_PLACEHOLDER {
                ScopeSegment::Context
            } else {
                ScopeSegment::Literal(part.to_string())
            });
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Serialize for Scope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Scope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
