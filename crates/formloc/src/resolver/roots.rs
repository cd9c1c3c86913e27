//! Schema-root configuration: which dictionary scope serves each context.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::resolver::context::TextContext;
use crate::resolver::scope::Scope;

/// The set of dictionary scopes consulted when assembling schema keys.
///
/// Each rendering context may carry its own scope; the fallback scope is
/// mandatory and serves every context without one, as well as context-less
/// lookups. The builder will not produce a configuration without a
/// fallback, and deserialization rejects a missing or empty one — a
/// configuration problem never surfaces at lookup time.
///
/// The struct is read-only after construction and can be shared freely
/// across concurrent resolutions.
///
/// # Example
///
/// ```
/// use formloc::{SchemaRoots, TextContext};
///
/// let roots = SchemaRoots::builder()
///     .label("helpers.label".parse().unwrap())
///     .fallback("helpers.__context__".parse().unwrap())
///     .build();
///
/// let label = roots.scope_for(Some(TextContext::Label));
/// assert_eq!(label.to_string(), "helpers.label");
///
/// // Hint has no scope of its own, so the fallback serves it.
/// let hint = roots.scope_for(Some(TextContext::Hint));
/// assert_eq!(hint.to_string(), "helpers.__context__");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct SchemaRoots {
    /// Scope for label text.
    #[serde(default)]
    label: Option<Scope>,

    /// Scope for hint text.
    #[serde(default)]
    hint: Option<Scope>,

    /// Scope for legend text.
    #[serde(default)]
    legend: Option<Scope>,

    /// Scope for caption text.
    #[serde(default)]
    caption: Option<Scope>,

    /// Scope used when a context has no scope of its own. Mandatory.
    fallback: Scope,
}

impl SchemaRoots {
    /// Select the scope for a rendering context.
    ///
    /// Contexts without a configured scope, and lookups without a context,
    /// use the fallback scope.
    pub fn scope_for(&self, context: Option<TextContext>) -> &Scope {
        let contextual = match context {
            Some(TextContext::Label) => self.label.as_ref(),
            Some(TextContext::Hint) => self.hint.as_ref(),
            Some(TextContext::Legend) => self.legend.as_ref(),
            Some(TextContext::Caption) => self.caption.as_ref(),
            None => None,
        };

        contextual.unwrap_or(&self.fallback)
    }

    /// The mandatory fallback scope.
    pub fn fallback(&self) -> &Scope {
        &self.fallback
    }
}

impl Default for SchemaRoots {
    /// No contextual scopes; the fallback is the conventional
    /// `helpers.__context__`, producing keys like
    /// `helpers.label.person.name`.
    fn default() -> Self {
        SchemaRoots::builder()
            .fallback("helpers.__context__".parse().expect("valid scope literal"))
            .build()
    }
}
