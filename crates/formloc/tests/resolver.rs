//! End-to-end text resolution.

use formloc::{Catalog, LocalizedText, SchemaRoots, TextContext, TextResolver};

fn roots() -> SchemaRoots {
    SchemaRoots::builder()
        .label("helpers.label".parse().unwrap())
        .hint("helpers.hint".parse().unwrap())
        .fallback("helpers.__context__".parse().unwrap())
        .build()
}

fn resolver_with(entries: &[(&str, &str)]) -> TextResolver<Catalog> {
    let mut catalog = Catalog::new();
    for (key, text) in entries {
        catalog.insert("en", key, *text);
    }

    TextResolver::builder()
        .store(catalog)
        .roots(roots())
        .locale("en")
        .build()
}

// =========================================================================
// Plain and Rich Lookups
// =========================================================================

#[test]
fn plain_translation_resolves() {
    let resolver = resolver_with(&[("helpers.label.person.name", "Full name")]);

    let text = resolver.resolve("person", "name", None, Some(TextContext::Label));

    assert_eq!(text, Some(LocalizedText::Plain("Full name".to_string())));
}

#[test]
fn html_variant_is_consulted_when_plain_misses() {
    let resolver = resolver_with(&[("helpers.label.person.name_html", "<em>Full</em> name")]);

    let text = resolver.resolve("person", "name", None, Some(TextContext::Label));

    assert_eq!(
        text,
        Some(LocalizedText::Html("<em>Full</em> name".to_string())),
    );
    assert!(text.unwrap().is_html());
}

#[test]
fn plain_translation_wins_over_html_variant() {
    let resolver = resolver_with(&[
        ("helpers.label.person.name", "Full name"),
        ("helpers.label.person.name_html", "<em>Full</em> name"),
    ]);

    let text = resolver.resolve("person", "name", None, Some(TextContext::Label));

    assert_eq!(text, Some(LocalizedText::Plain("Full name".to_string())));
}

#[test]
fn missing_translation_is_a_silent_none() {
    let resolver = resolver_with(&[]);

    let text = resolver.resolve("person", "department", Some("sales"), Some(TextContext::Hint));

    assert_eq!(text, None);
}

// =========================================================================
// Key Construction Through the Resolver
// =========================================================================

#[test]
fn nested_container_resolves_through_its_combined_path() {
    let resolver = resolver_with(&[(
        "helpers.label.person.address.number_and_street",
        "Building and street",
    )]);

    let text = resolver.resolve(
        "person[address]",
        "number_and_street",
        None,
        Some(TextContext::Label),
    );

    assert_eq!(
        text,
        Some(LocalizedText::Plain("Building and street".to_string())),
    );
}

#[test]
fn discriminator_value_resolves_option_specific_text() {
    let resolver = resolver_with(&[("helpers.label.person.department_options.sales", "Sales")]);

    let text = resolver.resolve("person", "department", Some("sales"), Some(TextContext::Label));

    assert_eq!(text, Some(LocalizedText::Plain("Sales".to_string())));
}

#[test]
fn unconfigured_context_resolves_through_the_fallback_scope() {
    let resolver = resolver_with(&[("helpers.caption.person.name", "About you")]);

    // Caption has no scope of its own; the fallback's placeholder carries
    // the context name into the key.
    let text = resolver.resolve("person", "name", None, Some(TextContext::Caption));

    assert_eq!(text, Some(LocalizedText::Plain("About you".to_string())));
}

#[test]
fn schema_key_is_exposed_for_inspection() {
    let resolver = resolver_with(&[]);

    let key = resolver.schema_key("person", "name", None, Some(TextContext::Label));

    assert_eq!(key.to_string(), "helpers.label.person.name");
}

// =========================================================================
// Short-Circuits
// =========================================================================

#[test]
fn empty_container_name_short_circuits() {
    let resolver = resolver_with(&[("helpers.label.person.name", "Full name")]);

    assert_eq!(resolver.resolve("", "name", None, Some(TextContext::Label)), None);
}

#[test]
fn empty_field_name_short_circuits() {
    let resolver = resolver_with(&[("helpers.label.person.name", "Full name")]);

    assert_eq!(resolver.resolve("person", "", None, Some(TextContext::Label)), None);
}

// =========================================================================
// Locale Handling
// =========================================================================

#[test]
fn locale_is_forwarded_to_the_store() {
    let mut catalog = Catalog::new();
    catalog.insert("en", "helpers.label.person.name", "Full name");
    catalog.insert("cy", "helpers.label.person.name", "Enw llawn");

    let mut resolver = TextResolver::builder()
        .store(catalog)
        .roots(roots())
        .locale("en")
        .build();

    assert_eq!(
        resolver.resolve("person", "name", None, Some(TextContext::Label)),
        Some(LocalizedText::Plain("Full name".to_string())),
    );

    resolver.set_locale("cy");
    assert_eq!(
        resolver.resolve("person", "name", None, Some(TextContext::Label)),
        Some(LocalizedText::Plain("Enw llawn".to_string())),
    );

    resolver.set_locale("fr");
    assert_eq!(resolver.resolve("person", "name", None, Some(TextContext::Label)), None);
}

#[test]
fn resolver_defaults_to_english_and_default_roots() {
    let mut catalog = Catalog::new();
    catalog.insert("en", "helpers.hint.person.email", "We only use this once");

    let resolver = TextResolver::new(catalog);

    assert_eq!(resolver.locale(), "en");
    assert_eq!(
        resolver.resolve("person", "email", None, Some(TextContext::Hint)),
        Some(LocalizedText::Plain("We only use this once".to_string())),
    );
}

// =========================================================================
// Idempotence
// =========================================================================

#[test]
fn repeated_resolution_is_identical() {
    let resolver = resolver_with(&[("helpers.label.person.name", "Full name")]);

    let first = resolver.resolve("person", "name", None, Some(TextContext::Label));
    let second = resolver.resolve("person", "name", None, Some(TextContext::Label));

    assert_eq!(first, second);
}

// =========================================================================
// Shared Stores
// =========================================================================

#[test]
fn resolvers_can_borrow_a_shared_store() {
    let mut catalog = Catalog::new();
    catalog.insert("en", "helpers.label.person.name", "Full name");
    catalog.insert("en", "helpers.hint.person.name", "As shown on your passport");

    let labels = TextResolver::builder().store(&catalog).roots(roots()).build();
    let hints = TextResolver::builder().store(&catalog).roots(roots()).build();

    assert_eq!(
        labels.resolve("person", "name", None, Some(TextContext::Label)),
        Some(LocalizedText::Plain("Full name".to_string())),
    );
    assert_eq!(
        hints.resolve("person", "name", None, Some(TextContext::Hint)),
        Some(LocalizedText::Plain("As shown on your passport".to_string())),
    );
}
