use std::{io, ops::Range};

use derive_more::{Display, Error};

/// A fatal problem with one line of the enum listing.
///
/// `span` is a byte range into the whole input, used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    #[display(fmt = "line {}: expected `<key>:<name>`", line)]
    MalformedLine { line: usize, span: Range<usize> },
    #[display(fmt = "line {}: `{}` is not a hexadecimal enum value", line, key)]
    InvalidKey {
        line: usize,
        key: String,
        span: Range<usize>,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedLine { line, .. } | ParseError::InvalidKey { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Range<usize> {
        match self {
            ParseError::MalformedLine { span, .. } | ParseError::InvalidKey { span, .. } => {
                span.clone()
            }
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseError::MalformedLine { .. } => "missing `:` separator, or name starts with `:`",
            ParseError::InvalidKey { .. } => "expected a hexadecimal integer that fits in 32 bits",
        }
    }

    fn build_report(&self) -> ariadne::Report<'_> {
        let span = self.span();
        ariadne::Report::build(ariadne::ReportKind::Error, (), span.start)
            .with_message(self)
            .with_label(ariadne::Label::new(span).with_message(self.label()))
            .finish()
    }

    /// Renders the error against `source` onto stderr.
    pub fn report(&self, source: &str) -> io::Result<()> {
        self.build_report().eprint(ariadne::Source::from(source))
    }

    pub fn write_report<W: io::Write>(&self, source: &str, out: W) -> io::Result<()> {
        self.build_report().write(ariadne::Source::from(source), out)
    }
}
