//! Persistence codec
//!
//! Each entry is stored on its own line:
//!
//! ```text
//! word:definition:synonym1,synonym2,
//! ```
//!
//! Fields are not escaped; [`Entry`] construction rejects the separators so
//! that every stored entry reads back unchanged.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{DictError, Result};
use crate::store::Dictionary;
use crate::types::{Encoding, Entry, LoadReport, FIELD_SEPARATOR, LIST_SEPARATOR, MAX_SYNONYMS};
use crate::utils::{decode_text, encode_text};

/// word, definition and synonym blob, separated by exactly two colons
const LINE_PATTERN: &str = r"^([^:]*):([^:]*):([^:]*)$";

/// Render one entry as a line, without the terminator
pub fn format_entry(entry: &Entry) -> String {
    let mut line = String::with_capacity(entry.word().len() + entry.definition().len() + 2);
    line.push_str(entry.word());
    line.push(FIELD_SEPARATOR);
    line.push_str(entry.definition());
    line.push(FIELD_SEPARATOR);
    for synonym in entry.synonyms() {
        line.push_str(synonym);
        line.push(LIST_SEPARATOR);
    }
    line
}

/// Render the whole dictionary, one line per entry
pub fn to_text(dict: &Dictionary) -> String {
    let mut text = String::new();
    for entry in dict.iter() {
        // writing to a String cannot fail
        let _ = writeln!(text, "{}", format_entry(entry));
    }
    text
}

/// Write the whole dictionary to `writer`
pub fn serialize<W: Write>(dict: &Dictionary, writer: &mut W) -> Result<()> {
    for entry in dict.iter() {
        writeln!(writer, "{}", format_entry(entry))?;
    }
    writer.flush()?;
    Ok(())
}

/// Parser for persisted lines
pub struct LineParser {
    re: Regex,
}

impl LineParser {
    pub fn new() -> Result<Self> {
        Ok(LineParser {
            re: Regex::new(LINE_PATTERN)?,
        })
    }

    /// Parse a single line into an entry
    ///
    /// Synonyms past the maximum are dropped; the second value is how many.
    pub fn parse_line(&self, line_no: usize, line: &str) -> Result<(Entry, usize)> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let caps = self.re.captures(line).ok_or_else(|| DictError::MalformedLine {
            line: line_no,
            reason: "expected exactly three ':' separated fields".to_string(),
        })?;

        let word = caps.get(1).map_or("", |m| m.as_str());
        let definition = caps.get(2).map_or("", |m| m.as_str());
        let blob = caps.get(3).map_or("", |m| m.as_str());

        let mut synonyms: Vec<&str> = blob
            .split(LIST_SEPARATOR)
            .filter(|s| !s.is_empty())
            .collect();
        let dropped = synonyms.len().saturating_sub(MAX_SYNONYMS);
        synonyms.truncate(MAX_SYNONYMS);

        let entry = Entry::new(word, definition, synonyms).map_err(|e| DictError::MalformedLine {
            line: line_no,
            reason: e.to_string(),
        })?;
        Ok((entry, dropped))
    }
}

/// Rebuild a dictionary from persisted text
///
/// Invalid lines are skipped and counted in the report. Chain order within
/// each bucket matches the order the lines were written in.
pub fn deserialize(text: &str) -> Result<(Dictionary, LoadReport)> {
    let parser = LineParser::new()?;
    let mut report = LoadReport::default();
    let mut entries = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parser.parse_line(idx + 1, line) {
            Ok((entry, dropped)) => {
                if dropped > 0 {
                    warn!(
                        line = idx + 1,
                        word = entry.word(),
                        dropped,
                        "too many synonyms, keeping the first {}",
                        MAX_SYNONYMS
                    );
                    report.dropped_synonyms += dropped;
                }
                entries.push(entry);
            }
            Err(e) => {
                warn!("skipping entry: {}", e);
                report.skipped += 1;
            }
        }
    }

    // Adding prepends, so feed the lines back in reverse
    let mut dict = Dictionary::new();
    report.loaded = entries.len();
    for entry in entries.into_iter().rev() {
        dict.add(entry);
    }
    Ok((dict, report))
}

/// Write the dictionary to `path`, replacing any previous content
pub fn save<P: AsRef<Path>>(dict: &Dictionary, path: P, encoding: Encoding) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_text(&to_text(dict), encoding)?;
    fs::write(path, bytes)?;
    debug!(path = %path.display(), entries = dict.len(), "dictionary saved");
    Ok(())
}

/// Load a dictionary from `path`
///
/// A missing file is not an error and yields an empty dictionary.
pub fn load<P: AsRef<Path>>(path: P, encoding: Encoding) -> Result<(Dictionary, LoadReport)> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no dictionary file, starting empty");
            return Ok((Dictionary::new(), LoadReport::default()));
        }
        Err(e) => return Err(e.into()),
    };

    let (text, lossy) = decode_text(&bytes, encoding);
    if lossy {
        warn!(path = %path.display(), %encoding, "invalid byte sequences replaced while decoding");
    }

    let (dict, mut report) = deserialize(&text)?;
    report.file_found = true;
    report.lossy = lossy;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        "dictionary loaded"
    );
    Ok((dict, report))
}
