//! Container-name parsing.
//!
//! Form containers arrive as bracket-indexed names like
//! `person[address][0][number_and_street]`. This module extracts the
//! semantic path segments from such a name, dropping array indexes and
//! anything else that cannot name a dictionary entry.

mod container;

pub use container::parse_container_name;
