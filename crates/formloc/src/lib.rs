pub mod parser;
pub mod resolver;
pub mod store;

pub use parser::parse_container_name;
pub use resolver::{
    CONTEXT_PLACEHOLDER, ConfigError, LocalizedText, SchemaKey, SchemaRoots, Scope, ScopeSegment,
    TextContext, TextResolver,
};
pub use store::{Catalog, LoadError, TranslationStore};
