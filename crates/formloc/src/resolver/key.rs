//! Schema-key assembly.

use std::fmt;

use crate::parser::parse_container_name;
use crate::resolver::context::TextContext;
use crate::resolver::scope::{CONTEXT_PLACEHOLDER, Scope};

/// A fully-qualified dictionary lookup key.
///
/// Built fresh for every resolution and never retained. `Display` joins
/// the segments with `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaKey {
    segments: Vec<String>,
}

impl SchemaKey {
    /// Assemble the key for one resolution.
    ///
    /// The container name is scanned into word segments which are joined
    /// into a single combined segment, so `person[address]` contributes
    /// `person.address` as one element between the scope and the field. A
    /// non-empty discriminator value turns the field segment into
    /// `{field}_options` followed by the value. Placeholder segments take
    /// the context's name, or the empty string when no context is given
    /// (the key then legitimately misses).
    ///
    /// The final key is not validated: empty components are allowed and
    /// simply never match a dictionary entry.
    pub fn assemble(
        scope: &Scope,
        container_name: &str,
        field_name: &str,
        value: Option<&str>,
        context: Option<TextContext>,
    ) -> SchemaKey {
        let container = parse_container_name(container_name).join(".");

        let mut segments: Vec<String> =
            scope.segments().iter().map(ToString::to_string).collect();
        segments.push(container);
        match value.filter(|v| !v.is_empty()) {
            Some(value) => {
                segments.push(format!("{field_name}_options"));
                segments.push(value.to_string());
            }
            None => segments.push(field_name.to_string()),
        }

        let context_name = context.map(TextContext::as_str).unwrap_or_default();
        for segment in &mut segments {
            if segment == CONTEXT_PLACEHOLDER {
                *segment = context_name.to_string();
            }
        }

        SchemaKey { segments }
    }

    /// The key's segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
