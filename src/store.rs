//! Dictionary store
//!
//! A fixed-size hash table with chained buckets. Each bucket is an ordered
//! chain whose front holds the most recently added entry.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{DictError, Result};
use crate::types::{Entry, BUCKET_COUNT};
use crate::utils::hash_word;

/// In-memory word dictionary
///
/// Adding a word that is already present keeps the older entry: the new one
/// is placed in front of it and shadows it until it is removed.
#[derive(Debug, Clone)]
pub struct Dictionary {
    buckets: Vec<VecDeque<Entry>>,
    len: usize,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Dictionary {
            buckets: vec![VecDeque::new(); BUCKET_COUNT],
            len: 0,
        }
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index a word hashes to
    pub fn bucket_of(&self, word: &str) -> usize {
        hash_word(word, self.buckets.len())
    }

    /// Total number of entries, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Add an entry to the front of its bucket's chain
    pub fn add(&mut self, entry: Entry) {
        let index = self.bucket_of(entry.word());
        debug!(word = entry.word(), bucket = index, "adding entry");
        self.buckets[index].push_front(entry);
        self.len += 1;
    }

    /// Validate the parts of an entry and add it
    pub fn insert<I, S>(&mut self, word: &str, definition: &str, synonyms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = Entry::new(word, definition, synonyms)?;
        self.add(entry);
        Ok(())
    }

    /// Remove the front-most entry for `word` and return it
    pub fn take(&mut self, word: &str) -> Option<Entry> {
        let index = self.bucket_of(word);
        let chain = &mut self.buckets[index];
        let pos = chain.iter().position(|e| e.word() == word)?;
        let entry = chain.remove(pos)?;
        self.len -= 1;
        debug!(word, bucket = index, "removed entry");
        Some(entry)
    }

    /// Remove the front-most entry for `word`
    ///
    /// Returns whether an entry was found. Older duplicates stay in place.
    pub fn remove(&mut self, word: &str) -> bool {
        self.take(word).is_some()
    }

    /// Find the most recently added entry for `word`
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        self.buckets[self.bucket_of(word)]
            .iter()
            .find(|e| e.word() == word)
    }

    /// Like [`Dictionary::lookup`], but absence is a [`DictError::NotFound`]
    pub fn get(&self, word: &str) -> Result<&Entry> {
        self.lookup(word)
            .ok_or_else(|| DictError::NotFound(word.to_string()))
    }

    /// Synonyms of `word`
    ///
    /// `Some(&[])` means the word exists but has no synonyms; `None` means
    /// the word is absent.
    pub fn lookup_synonyms(&self, word: &str) -> Option<&[String]> {
        self.lookup(word).map(Entry::synonyms)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Iterate over all entries, buckets in index order and each chain
    /// front to back
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.buckets.iter().flat_map(|chain| chain.iter())
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Entry;
    type IntoIter = Box<dyn Iterator<Item = &'a Entry> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
