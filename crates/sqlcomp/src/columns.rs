//! Column registry: the discovered columns of one table and their selection flags.

use crate::error::{SqlError, SqlResult};
use std::collections::HashMap;

/// Reserved registry key. Selecting it renders `*` instead of a column list.
pub const ALL_COLUMNS: &str = "ALL_COLUMNS";

/// Set name reported by [`SqlError::UnknownValue`] for column lookups.
pub(crate) const COLUMN_SET: &str = "columns";

/// Discovered column names, each flagged selected or not.
///
/// Columns keep discovery order, which is also the order a SELECT list is
/// rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRegistry {
    entries: Vec<(String, bool)>,
    index: HashMap<String, usize>,
    all_selected: bool,
}

impl ColumnRegistry {
    /// Build a registry with every name unselected. Duplicate names collapse to one entry.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::default();
        for name in names {
            let name = name.into();
            if registry.index.contains_key(&name) {
                continue;
            }
            registry.index.insert(name.clone(), registry.entries.len());
            registry.entries.push((name, false));
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` was discovered for the table.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Fail with [`SqlError::UnknownValue`] unless `name` was discovered.
    pub fn ensure_known(&self, name: &str) -> SqlResult<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(SqlError::unknown_value(name, COLUMN_SET))
        }
    }

    /// Mark a column selected. [`ALL_COLUMNS`] is always accepted.
    pub fn select(&mut self, name: &str) -> SqlResult<()> {
        if name == ALL_COLUMNS {
            self.all_selected = true;
        }
        match self.index.get(name) {
            Some(&i) => {
                self.entries[i].1 = true;
                Ok(())
            }
            None if name == ALL_COLUMNS => Ok(()),
            None => Err(SqlError::unknown_value(name, COLUMN_SET)),
        }
    }

    pub fn is_selected(&self, name: &str) -> bool {
        if name == ALL_COLUMNS {
            return self.all_selected;
        }
        self.index
            .get(name)
            .is_some_and(|&i| self.entries[i].1)
    }

    /// Whether the [`ALL_COLUMNS`] sentinel is selected.
    pub fn all_selected(&self) -> bool {
        self.all_selected
    }

    /// Selected column names in discovery order, excluding the sentinel.
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(name, selected)| *selected && name != ALL_COLUMNS)
            .map(|(name, _)| name.as_str())
    }

    /// All discovered names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, selected)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(name, selected)| (name.as_str(), *selected))
    }
}
