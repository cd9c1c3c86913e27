//! Container-name scanning behavior.

use formloc::parse_container_name;

// =========================================================================
// Bracketed Word Segments
// =========================================================================

#[test]
fn bracketed_segments_in_order() {
    assert_eq!(parse_container_name("[a][b][c]"), ["a", "b", "c"]);
    assert_eq!(parse_container_name("[a_b][b_c][c_d]"), ["a_b", "b_c", "c_d"]);
}

#[test]
fn leading_name_then_brackets() {
    assert_eq!(parse_container_name("a[b][c]"), ["a", "b", "c"]);
    assert_eq!(
        parse_container_name("person[address][0][number_and_street]"),
        ["person", "address", "number_and_street"],
    );
}

#[test]
fn plain_name_is_a_single_segment() {
    assert_eq!(parse_container_name("person"), ["person"]);
}

// =========================================================================
// Dropped Segments
// =========================================================================

#[test]
fn numeric_indexes_are_dropped() {
    assert_eq!(parse_container_name("[a][0][b][c]"), ["a", "b", "c"]);
    assert_eq!(parse_container_name("[a][0][b][0][c]"), ["a", "b", "c"]);
    assert_eq!(
        parse_container_name("[a_b][0][c_d][0][d_e]"),
        ["a_b", "c_d", "d_e"],
    );
}

#[test]
fn underscore_and_symbol_segments_are_dropped() {
    assert_eq!(parse_container_name("[a][_][b]"), ["a", "b"]);
    assert_eq!(parse_container_name("[a][___][b]"), ["a", "b"]);
    assert_eq!(parse_container_name("[a][?][b]"), ["a", "b"]);
}

#[test]
fn segment_led_by_a_non_letter_is_dropped_whole() {
    assert_eq!(parse_container_name("[a][_foo][b]"), ["a", "b"]);
    assert_eq!(parse_container_name("[a][0bbb][b]"), ["a", "b"]);
}

#[test]
fn embedded_digits_after_a_letter_are_kept() {
    assert_eq!(parse_container_name("[a][0][bbb0][c]"), ["a", "bbb0", "c"]);
}

// =========================================================================
// Whitespace
// =========================================================================

#[test]
fn internal_spaces_stay_in_one_segment() {
    assert_eq!(
        parse_container_name("[a][string with spaces][b]"),
        ["a", "string with spaces", "b"],
    );
}

#[test]
fn whitespace_between_brackets_contributes_nothing() {
    assert_eq!(parse_container_name("[a] [b]"), ["a", "b"]);
}

// =========================================================================
// Degenerate Input
// =========================================================================

#[test]
fn empty_input_yields_no_segments() {
    assert!(parse_container_name("").is_empty());
}

#[test]
fn input_with_no_letters_yields_no_segments() {
    assert!(parse_container_name("[0][1][2]").is_empty());
    assert!(parse_container_name("[_][?][!]").is_empty());
}
