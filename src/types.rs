//! Core data types for the wordbook

use std::fmt;
use std::str::FromStr;

use crate::error::{DictError, Result};

/// Maximum word length, in characters
pub const MAX_WORD_LENGTH: usize = 50;

/// Maximum definition length, in characters
pub const MAX_DEFINITION_LENGTH: usize = 200;

/// Maximum length of a single synonym, in characters
pub const MAX_SYNONYM_LENGTH: usize = 50;

/// Maximum number of synonyms per entry
pub const MAX_SYNONYMS: usize = 10;

/// Number of buckets in the dictionary hash table
pub const BUCKET_COUNT: usize = 100;

/// Separator between the fields of a persisted line
pub const FIELD_SEPARATOR: char = ':';

/// Separator between synonyms of a persisted line
pub const LIST_SEPARATOR: char = ',';

/// Text encoding of the persisted file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Gb18030,
    Big5,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Gb18030 => "gb18030",
            Encoding::Big5 => "big5",
        }
    }
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::Utf8
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            "gb18030" | "gbk" | "gb2312" => Ok(Encoding::Gb18030),
            "big5" => Ok(Encoding::Big5),
            other => Err(DictError::EncodingError(format!(
                "unsupported encoding '{}'",
                other
            ))),
        }
    }
}

/// A dictionary entry: a word, its definition and its synonyms
///
/// Entries can only be built through [`Entry::new`], which enforces the
/// length limits and rejects the characters reserved by the file format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    definition: String,
    synonyms: Vec<String>,
}

impl Entry {
    /// Create a validated entry
    pub fn new<W, D, I, S>(word: W, definition: D, synonyms: I) -> Result<Self>
    where
        W: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let word = word.into();
        let definition = definition.into();
        let synonyms: Vec<String> = synonyms.into_iter().map(Into::into).collect();

        if word.is_empty() {
            return Err(DictError::EmptyWord);
        }
        check_field("word", &word, MAX_WORD_LENGTH)?;
        check_field("definition", &definition, MAX_DEFINITION_LENGTH)?;

        if synonyms.len() > MAX_SYNONYMS {
            return Err(DictError::TooManySynonyms {
                max: MAX_SYNONYMS,
                count: synonyms.len(),
            });
        }
        for synonym in &synonyms {
            if synonym.is_empty() {
                return Err(DictError::EmptySynonym);
            }
            check_field("synonym", synonym, MAX_SYNONYM_LENGTH)?;
        }

        Ok(Entry {
            word,
            definition,
            synonyms,
        })
    }

    /// The word this entry is keyed by
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }
}

/// Check a field's length and reject characters reserved by the line format
fn check_field(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(DictError::FieldTooLong { field, max, len });
    }
    if let Some(ch) = value
        .chars()
        .find(|c| matches!(*c, FIELD_SEPARATOR | LIST_SEPARATOR | '\n' | '\r'))
    {
        return Err(DictError::ReservedCharacter { field, ch });
    }
    Ok(())
}

/// Summary of a dictionary load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Whether the file existed
    pub file_found: bool,
    /// Number of entries loaded
    pub loaded: usize,
    /// Number of lines skipped as malformed or invalid
    pub skipped: usize,
    /// Number of synonyms dropped because a line exceeded the maximum
    pub dropped_synonyms: usize,
    /// Whether decoding had to replace invalid byte sequences
    pub lossy: bool,
}

impl LoadReport {
    /// Messages to show the user after loading
    pub fn notices(&self, encoding: Encoding) -> Vec<String> {
        let mut notices = Vec::new();
        if !self.file_found {
            notices.push("No dictionary file found. Starting with an empty dictionary.".to_string());
            return notices;
        }
        if self.skipped > 0 {
            notices.push(format!(
                "Loaded {} entries, skipped {} invalid lines.",
                self.loaded, self.skipped
            ));
        }
        if self.lossy {
            notices.push(format!(
                "Warning: the dictionary file contains bytes that are not valid {}; \
                 they will be replaced when the dictionary is saved.",
                encoding
            ));
        }
        notices
    }
}
