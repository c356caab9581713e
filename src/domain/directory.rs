use std::collections::VecDeque;
use std::path::Path;

use tracing::{debug, info};

use super::Entry;
use crate::errors::AppError;
use crate::store::{EntryStore, txt::TxtStore};

/// Ordered collection of entries.
///
/// Index 0 is the head: the most recent insert, or the first name after a
/// call to [`Directory::sort_by_name`]. Lookups walk from the head, so with
/// duplicate names the head-most entry always wins.
#[derive(Debug, Default, Clone)]
pub struct Directory {
    entries: VecDeque<Entry>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepends `entry`. Existing entries with the same name are kept.
    pub fn insert(&mut self, entry: Entry) {
        debug!(name = %entry.name, "inserting entry at head");
        self.entries.push_front(entry);
    }

    /// Removes the first entry named `name` and hands it back.
    pub fn delete(&mut self, name: &str) -> Option<Entry> {
        let index = self.position(name)?;
        let removed = self.entries.remove(index);
        debug!(name, index, "deleted entry");
        removed
    }

    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.name == name)
    }

    pub fn update(&mut self, name: &str, new_phone: &str) -> Result<(), AppError> {
        match self.find_mut(name) {
            Some(entry) => {
                entry.phone = new_phone.to_string();
                debug!(name, "updated phone");
                Ok(())
            }
            None => Err(AppError::NotFound(format!("Entry '{}'", name))),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: &self.entries,
            idx: 0,
        }
    }

    /// Stable, case-sensitive sort by name. Later inserts still go to the head.
    pub fn sort_by_name(&mut self) {
        let mut sorted: Vec<Entry> = self.entries.drain(..).collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries = VecDeque::from(sorted);
        debug!(len = self.entries.len(), "sorted entries by name");
    }

    /// Writes every entry as a `name phone` line, truncating `path` first.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), AppError> {
        let path = path.as_ref();
        let entries: Vec<&Entry> = self.iter().collect();

        TxtStore::new(path).save(&entries)?;

        info!(path = %path.display(), count = entries.len(), "saved phonebook");
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }
}

pub struct Iter<'a> {
    inner: &'a VecDeque<Entry>,
    idx: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.inner.get(self.idx)?;
        self.idx += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len().saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
