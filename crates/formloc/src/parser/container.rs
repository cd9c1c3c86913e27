//! Container-name segment scanner using winnow.
//!
//! A container name is scanned as a sequence of runs and separators:
//! - a run is a maximal stretch of word characters (alphanumeric or `_`)
//!   and whitespace,
//! - a run contributes a segment only when its first character is
//!   alphabetic; runs led by a digit, underscore, or whitespace are
//!   discarded whole,
//! - any other character (brackets, punctuation) separates runs and is
//!   discarded.
//!
//! Whitespace does not terminate a run, so a bracketed name with internal
//! spaces stays one segment.

use winnow::combinator::{alt, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Extract the ordered word segments of a nested container name.
///
/// Array indexes contribute nothing, and a run that does not start with a
/// letter is dropped entirely rather than partially kept. Any input is
/// accepted; the worst case is an empty result.
///
/// # Example
///
/// ```
/// use formloc::parse_container_name;
///
/// assert_eq!(
///     parse_container_name("person[address][0][number_and_street]"),
///     vec!["person", "address", "number_and_street"],
/// );
/// assert!(parse_container_name("[0][_][?]").is_empty());
/// ```
pub fn parse_container_name(name: &str) -> Vec<String> {
    let tokens: Vec<Option<String>> = match repeat(0.., token).parse(name) {
        Ok(tokens) => tokens,
        Err(_) => return Vec::new(),
    };

    tokens.into_iter().flatten().collect()
}

/// One scan step: a word/whitespace run, or a single separator character.
fn token(input: &mut &str) -> ModalResult<Option<String>> {
    alt((run, any.value(None))).parse_next(input)
}

/// Parse a maximal run of word or whitespace characters.
///
/// Yields the run when it starts with an alphabetic character, `None`
/// otherwise.
fn run(input: &mut &str) -> ModalResult<Option<String>> {
    take_while(1.., |c: char| is_word(c) || c.is_whitespace())
        .map(|run: &str| {
            run.chars()
                .next()
                .filter(|c| c.is_alphabetic())
                .map(|_| run.to_string())
        })
        .parse_next(input)
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
