use std::convert::TryFrom;

use color_eyre::eyre::eyre;
use itertools::Itertools;
use tracing::{debug, trace};

use crate::ast::SortedTable;

pub const DEFAULT_PACKAGE: &str = "opengl";
pub const DEFAULT_VAR_NAME: &str = "GlEnums";
pub const DEFAULT_COMMENT: &str = "GlEnum string lookup";
/// Deprecated token whose value collides with its successor.
pub const DEFAULT_EXCLUSION: &str = "TIMEOUT_IGNORED";

const DECL_INDENT: &str = "    ";
const ENTRY_INDENT: &str = "        ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Excluded names are dropped before grouping, keys are `uint32`.
    Preferred,
    /// Output of the original generator script: `int` keys, excluded
    /// groups commented out, trailing blank line.
    Legacy,
}

impl Style {
    fn key_type(self) -> &'static str {
        match self {
            Style::Preferred => "uint32",
            Style::Legacy => "int",
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::Preferred
    }
}

impl TryFrom<&str> for Style {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match &*value.trim().to_ascii_lowercase() {
            "preferred" => Ok(Style::Preferred),
            "legacy" => Ok(Style::Legacy),
            other => Err(eyre!("Invalid style: {}", &other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenOptions {
    pub package: String,
    pub var_name: String,
    pub comment: String,
    pub exclusions: Vec<String>,
    pub style: Style,
}

impl Default for GenOptions {
    fn default() -> Self {
        GenOptions {
            package: DEFAULT_PACKAGE.to_string(),
            var_name: DEFAULT_VAR_NAME.to_string(),
            comment: DEFAULT_COMMENT.to_string(),
            exclusions: vec![DEFAULT_EXCLUSION.to_string()],
            style: Style::default(),
        }
    }
}

impl GenOptions {
    /// Names removed at parse time. The legacy style keeps them and comments them out instead.
    pub fn dropped_names(&self) -> &[String] {
        match self.style {
            Style::Preferred => &self.exclusions,
            Style::Legacy => &[],
        }
    }

    fn is_excluded(&self, names: &[String]) -> bool {
        names.iter().any(|name| self.exclusions.contains(name))
    }
}

/// Width of the `<key>:` column: digits of the largest key plus the colon.
pub fn key_padding(table: &SortedTable) -> usize {
    table
        .max_key()
        .map_or(0, |key| key.to_string().len())
        + 1
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

fn entry_line(key: u32, names: &[String], width: usize, commented: bool) -> String {
    let token = format!("{}:", key);
    let names = names.iter().map(|name| quote(name)).join(", ");
    format!(
        "{}{}{:<width$} []string{{{}}},",
        ENTRY_INDENT,
        if commented { "// " } else { "" },
        token,
        names,
        width = width
    )
}

/// Renders `table` as a Go source file declaring the lookup map.
pub fn render(table: &SortedTable, options: &GenOptions) -> String {
    let width = key_padding(table);
    debug!(entries = table.len(), width, style = ?options.style, "rendering enum table");

    let mut lines = vec![
        format!("package {}", options.package),
        String::new(),
        format!("// {}", options.comment),
        "var (".to_string(),
        format!(
            "{}{} = map[{}][]string{{",
            DECL_INDENT,
            options.var_name,
            options.style.key_type()
        ),
    ];
    for (key, names) in table.iter() {
        let commented = options.style == Style::Legacy && options.is_excluded(names);
        if commented {
            trace!(key, "commenting out excluded entry");
        }
        lines.push(entry_line(*key, names, width, commented));
    }
    lines.push(format!("{}}}", DECL_INDENT));
    lines.push(")".to_string());
    if options.style == Style::Legacy {
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
