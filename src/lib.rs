//! Generates a Go lookup table from OpenGL enum values to their names.
//!
//! The input is an enum listing with one `<hex value>:<NAME>` pair per line,
//! as dumped from the GL headers. Names sharing a value are grouped into one
//! entry and entries are emitted in ascending value order, so runtime code
//! can turn a numeric GL code back into every name it could stand for.

pub mod ast;
pub mod error;
pub mod gen;
pub mod parser;

pub use ast::{EnumGroup, RawEntry, SortedTable};
pub use error::ParseError;
pub use gen::{GenOptions, Style};

/// Runs the whole pipeline over `input`. Nothing is rendered unless every line parses.
pub fn generate(input: &str, options: &GenOptions) -> Result<String, ParseError> {
    let entries = parser::parse_listing(input, options.dropped_names())?;
    let table = entries.into_iter().collect::<EnumGroup>().into_sorted();
    Ok(gen::render(&table, options))
}
