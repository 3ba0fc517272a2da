use std::{collections::HashMap, iter::FromIterator};

use derive_more::Deref;
use itertools::Itertools;
use tracing::debug;

/// One `<key>:<name>` line of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: u32,
    pub name: String,
    /// 1-based line in the listing.
    pub line: usize,
}

impl RawEntry {
    pub fn new(key: u32, name: impl Into<String>, line: usize) -> Self {
        RawEntry {
            key,
            name: name.into(),
            line,
        }
    }
}

/// Names grouped by enum value, in the order they were first seen.
///
/// Several names can alias the same value (`GL_ZERO`/`GL_NONE`/`GL_NO_ERROR`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumGroup {
    groups: HashMap<u32, Vec<String>>,
}

impl EnumGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: RawEntry) {
        self.groups.entry(entry.key).or_default().push(entry.name);
    }

    pub fn names(&self, key: u32) -> Option<&[String]> {
        self.groups.get(&key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn into_sorted(self) -> SortedTable {
        let rows = self
            .groups
            .into_iter()
            .sorted_unstable_by_key(|(key, _)| *key)
            .collect_vec();
        debug!(groups = rows.len(), "sorted enum table");
        SortedTable(rows)
    }
}

impl FromIterator<RawEntry> for EnumGroup {
    fn from_iter<I: IntoIterator<Item = RawEntry>>(iter: I) -> Self {
        let mut group = EnumGroup::new();
        for entry in iter {
            group.insert(entry);
        }
        group
    }
}

/// Enum groups in ascending key order, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct SortedTable(Vec<(u32, Vec<String>)>);

impl SortedTable {
    pub fn max_key(&self) -> Option<u32> {
        self.0.last().map(|(key, _)| *key)
    }
}
