use pest::Parser;
use tracing::{debug, trace};

use crate::{ast::RawEntry, error::ParseError};

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "listing.pest"]
    pub(crate) struct ListingParser;
}

use grammar::{ListingParser, Rule};

/// Parses a whole enum listing, dropping every entry whose name is in `dropped`.
///
/// Blank lines are skipped. The first malformed line aborts the parse.
pub fn parse_listing(contents: &str, dropped: &[String]) -> Result<Vec<RawEntry>, ParseError> {
    let mut entries = Vec::new();
    let mut excluded = 0usize;
    for (idx, (offset, text)) in lines(contents).enumerate() {
        if text.trim().is_empty() {
            continue;
        }
        let entry = parse_entry(text, idx + 1, offset)?;
        if dropped.iter().any(|token| *token == entry.name) {
            trace!(line = entry.line, name = %entry.name, "dropping excluded entry");
            excluded += 1;
            continue;
        }
        entries.push(entry);
    }
    debug!(entries = entries.len(), excluded, "parsed enum listing");
    Ok(entries)
}

/// Byte offset and text of each line, without the line terminator.
fn lines<'a>(contents: &'a str) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let mut offset = 0;
    contents.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        (start, raw.strip_suffix('\r').unwrap_or(raw))
    })
}

/// Parses a single `<key>:<name>` line. `offset` is where `text` starts in the input.
pub fn parse_entry(text: &str, line: usize, offset: usize) -> Result<RawEntry, ParseError> {
    let line_span = offset..offset + text.len();
    let malformed = || ParseError::MalformedLine {
        line,
        span: line_span.clone(),
    };

    let entry = ListingParser::parse(Rule::entry, text)
        .map_err(|_| malformed())?
        .next()
        .ok_or_else(malformed)?;

    let mut key = None;
    let mut name = None;
    for pair in entry.into_inner() {
        match pair.as_rule() {
            Rule::key => key = Some(pair),
            Rule::name => name = Some(pair),
            _ => {}
        }
    }
    let (key, name) = key.zip(name).ok_or_else(malformed)?;

    let value = match parse_key(key.as_str()) {
        Some(value) => value,
        None => {
            let span = key.as_span();
            let span = if span.start() == span.end() {
                line_span.clone()
            } else {
                offset + span.start()..offset + span.end()
            };
            return Err(ParseError::InvalidKey {
                line,
                key: key.as_str().trim().to_string(),
                span,
            });
        }
    };

    Ok(RawEntry::new(value, name.as_str().trim(), line))
}

/// Enum listings are dumped in hex, with or without a `0x` prefix.
pub fn parse_key(field: &str) -> Option<u32> {
    let field = field.trim();
    let digits = field
        .strip_prefix("0x")
        .or_else(|| field.strip_prefix("0X"))
        .unwrap_or(field);
    u32::from_str_radix(digits, 16).ok()
}
