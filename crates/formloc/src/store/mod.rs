//! Translation storage.
//!
//! The engine consults a [`TranslationStore`] for every lookup; the trait
//! is the whole contract between the resolver and a dictionary. A
//! JSON-backed in-memory [`Catalog`] is provided for tests and for
//! applications that keep their dictionaries in memory.

mod catalog;
mod error;

use std::borrow::Cow;

pub use catalog::Catalog;
pub use error::LoadError;

/// A locale-scoped dictionary supporting nested dotted-key lookup.
///
/// A miss is `None`, never a panic or an error: the resolver treats
/// missing translations as an ordinary outcome. Implementations must
/// accept arbitrary nested dotted keys such as
/// `helpers.label.person.name`.
pub trait TranslationStore {
    /// Look up the text stored for `key` under `locale`.
    fn lookup(&self, locale: &str, key: &str) -> Option<Cow<'_, str>>;
}

impl<S: TranslationStore + ?Sized> TranslationStore for &S {
    fn lookup(&self, locale: &str, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(locale, key)
    }
}
