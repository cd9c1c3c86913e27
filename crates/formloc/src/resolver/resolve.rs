//! Two-stage text resolution against a translation store.

use bon::Builder;
use tracing::trace;

use crate::resolver::context::TextContext;
use crate::resolver::key::SchemaKey;
use crate::resolver::roots::SchemaRoots;
use crate::store::TranslationStore;

/// A resolved piece of form text.
///
/// `Html` text came from a `_html` key variant and is already
/// markup-safe; callers must not escape it again. A missing translation is
/// not a value of this type — resolution returns `None` for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalizedText {
    /// Plain text, to be escaped like any other output.
    Plain(String),
    /// Markup-bearing text from a `_html` key; not to be re-escaped.
    Html(String),
}

impl LocalizedText {
    /// The resolved text, regardless of variant.
    pub fn text(&self) -> &str {
        match self {
            LocalizedText::Plain(text) | LocalizedText::Html(text) => text,
        }
    }

    /// Whether the text came from the rich-text key variant.
    pub fn is_html(&self) -> bool {
        matches!(self, LocalizedText::Html(_))
    }
}

/// Resolves form text from a translation store.
///
/// The resolver owns the store, the schema-root configuration, and the
/// active locale. Each [`resolve`](TextResolver::resolve) call is
/// independent and idempotent: identical inputs against an unchanged store
/// yield identical results.
///
/// # Example
///
/// ```
/// use formloc::{Catalog, LocalizedText, SchemaRoots, TextContext, TextResolver};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("en", "helpers.label.person.name", "Full name");
///
/// let resolver = TextResolver::builder()
///     .store(catalog)
///     .roots(SchemaRoots::default())
///     .locale("en")
///     .build();
///
/// let text = resolver.resolve("person", "name", None, Some(TextContext::Label));
/// assert_eq!(text, Some(LocalizedText::Plain("Full name".to_string())));
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct TextResolver<S> {
    /// The dictionary queried for translations.
    store: S,

    /// Scope configuration for schema-key assembly.
    #[builder(default)]
    roots: SchemaRoots,

    /// Active locale, forwarded to the store on every lookup.
    #[builder(default = "en".to_string())]
    locale: String,
}

impl<S: TranslationStore> TextResolver<S> {
    /// Create a resolver over `store` with default roots and the `en`
    /// locale.
    pub fn new(store: S) -> Self {
        TextResolver::builder().store(store).build()
    }

    /// The active locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the active locale.
    ///
    /// The locale is forwarded to the store verbatim; any cross-locale
    /// fallback is the store's own contract.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// The schema-root configuration.
    pub fn roots(&self) -> &SchemaRoots {
        &self.roots
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store, e.g. for loading
    /// dictionaries after construction.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Build the schema key for a lookup without performing it.
    pub fn schema_key(
        &self,
        container_name: &str,
        field_name: &str,
        value: Option<&str>,
        context: Option<TextContext>,
    ) -> SchemaKey {
        SchemaKey::assemble(
            self.roots.scope_for(context),
            container_name,
            field_name,
            value,
            context,
        )
    }

    /// Resolve the text for a field in a container.
    ///
    /// Tries the plain key first, then the `_html` variant. Returns `None`
    /// without touching the store when the container or field name is
    /// empty, and `None` when both lookups miss — a missing translation is
    /// an ordinary outcome, not an error.
    pub fn resolve(
        &self,
        container_name: &str,
        field_name: &str,
        value: Option<&str>,
        context: Option<TextContext>,
    ) -> Option<LocalizedText> {
        if container_name.is_empty() || field_name.is_empty() {
            return None;
        }

        let key = self
            .schema_key(container_name, field_name, value, context)
            .to_string();
        trace!(locale = %self.locale, key = %key, "resolving form text");

        if let Some(text) = self.store.lookup(&self.locale, &key) {
            return Some(LocalizedText::Plain(text.into_owned()));
        }

        let html_key = format!("{key}_html");
        if let Some(text) = self.store.lookup(&self.locale, &html_key) {
            return Some(LocalizedText::Html(text.into_owned()));
        }

        trace!(key = %key, "no translation found");
        None
    }
}
