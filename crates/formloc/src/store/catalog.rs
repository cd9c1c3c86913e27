//! In-memory JSON-backed locale dictionaries.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::store::TranslationStore;
use crate::store::error::LoadError;

/// An in-memory translation catalog holding one nested dictionary per
/// locale.
///
/// Dictionaries are JSON objects whose leaves are strings; lookup walks
/// the object tree one dotted segment at a time. Loading a locale twice
/// **replaces** its previous dictionary. The catalog performs no
/// cross-locale fallback: an unknown locale simply misses.
///
/// # Example
///
/// ```
/// use formloc::{Catalog, TranslationStore};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .load_str("en", r#"{ "helpers": { "label": { "person": { "name": "Full name" } } } }"#)
///     .unwrap();
///
/// assert_eq!(
///     catalog.lookup("en", "helpers.label.person.name").as_deref(),
///     Some("Full name"),
/// );
/// assert_eq!(catalog.lookup("en", "helpers.label.person.age"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Per-locale dictionaries, each a nested JSON object.
    locales: HashMap<String, Map<String, Value>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the loaded locales, sorted.
    pub fn locale_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Load a locale dictionary from a JSON string.
    ///
    /// Returns the number of top-level entries. Loading the same locale
    /// twice replaces all previous entries for that locale.
    ///
    /// # Example
    ///
    /// ```
    /// use formloc::Catalog;
    ///
    /// let mut catalog = Catalog::new();
    /// let count = catalog
    ///     .load_str("en", r#"{ "helpers": {}, "errors": {} }"#)
    ///     .unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn load_str(&mut self, locale: &str, json: &str) -> Result<usize, LoadError> {
        self.load_str_internal(locale, json, None)
    }

    /// Load a locale dictionary from a JSON file.
    ///
    /// Loading the same locale twice replaces all previous entries for
    /// that locale.
    pub fn load_file(&mut self, locale: &str, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();

        let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        self.load_str_internal(locale, &json, Some(path))
    }

    /// Insert a single translation under a dotted key.
    ///
    /// Intermediate objects are created as needed; an existing non-object
    /// value on the path is replaced by an object.
    ///
    /// # Example
    ///
    /// ```
    /// use formloc::{Catalog, TranslationStore};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert("en", "helpers.hint.person.email", "We only use this once");
    /// assert!(catalog.lookup("en", "helpers.hint.person.email").is_some());
    /// ```
    pub fn insert(&mut self, locale: &str, key: &str, text: impl Into<String>) {
        let text = text.into();
        let mut node = self.locales.entry(locale.to_string()).or_default();

        let mut segments = key.split('.').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                node.insert(segment.to_string(), Value::String(text));
                break;
            }

            let entry = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            node = entry.as_object_mut().expect("entry was just made an object");
        }
    }

    fn load_str_internal(
        &mut self,
        locale: &str,
        json: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let error_path =
            || path.map_or_else(|| PathBuf::from(format!("<{locale}>")), Path::to_path_buf);

        let document: Value = serde_json::from_str(json).map_err(|e| LoadError::Parse {
            path: error_path(),
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

        let Value::Object(entries) = document else {
            return Err(LoadError::NotAnObject { path: error_path() });
        };

        let count = entries.len();
        debug!(locale, entries = count, "loaded locale dictionary");
        self.locales.insert(locale.to_string(), entries);
        Ok(count)
    }
}

impl TranslationStore for Catalog {
    /// Walk the locale's nested dictionary segment by segment.
    ///
    /// An unknown locale, a missing branch, an empty segment, or a
    /// non-string leaf all miss.
    fn lookup(&self, locale: &str, key: &str) -> Option<Cow<'_, str>> {
        let entries = self.locales.get(locale)?;

        let mut segments = key.split('.');
        let mut node = entries.get(segments.next()?)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }

        node.as_str().map(Cow::Borrowed)
    }
}
