//! Interactive menu session
//!
//! Drives a [`Dictionary`] from line-based input, writing prompts and results
//! to an output stream, and flushes the dictionary to disk after every change.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, error};

use crate::codec;
use crate::error::{DictError, Result};
use crate::store::Dictionary;
use crate::types::{Encoding, Entry, MAX_SYNONYMS};
use crate::utils::encode_text;

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Search,
    SearchSynonyms,
    Exit,
}

impl FromStr for Action {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Action::Add),
            "2" => Ok(Action::Remove),
            "3" => Ok(Action::Search),
            "4" => Ok(Action::SearchSynonyms),
            "5" => Ok(Action::Exit),
            other => Err(DictError::InvalidInput(format!("unknown choice '{}'", other))),
        }
    }
}

/// Where and how the dictionary is persisted
#[derive(Debug, Clone)]
pub struct Storage {
    pub path: PathBuf,
    pub encoding: Encoding,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(path: P, encoding: Encoding) -> Self {
        Storage {
            path: path.as_ref().to_path_buf(),
            encoding,
        }
    }
}

/// An interactive session over a dictionary
pub struct Session<R, W> {
    dict: Dictionary,
    storage: Storage,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(dict: Dictionary, storage: Storage, input: R, output: W) -> Self {
        Session {
            dict,
            storage,
            input,
            output,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dict
    }

    /// Consume the session, returning the dictionary and the output stream
    pub fn into_parts(self) -> (Dictionary, W) {
        (self.dict, self.output)
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Only errors writing to the output stream end the loop early.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                debug!("input closed");
                self.flush()?;
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                return Ok(());
            };

            match choice.parse::<Action>() {
                Ok(Action::Add) => self.add_word()?,
                Ok(Action::Remove) => self.remove_word()?,
                Ok(Action::Search) => self.search_word()?,
                Ok(Action::SearchSynonyms) => self.search_synonyms()?,
                Ok(Action::Exit) => {
                    self.flush()?;
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Err(_) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "What would you like to do?")?;
        writeln!(self.output, "1. Add word")?;
        writeln!(self.output, "2. Remove word")?;
        writeln!(self.output, "3. Search word")?;
        writeln!(self.output, "4. Search synonyms")?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read one line without its terminator; `None` at end of input
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn add_word(&mut self) -> Result<()> {
        let Some(word) = self.prompt("Enter the word: ")? else {
            return Ok(());
        };
        let Some(definition) = self.prompt("Enter the definition: ")? else {
            return Ok(());
        };
        let Some(count) = self.prompt("Enter number of synonyms: ")? else {
            return Ok(());
        };

        let count = match count.trim().parse::<usize>() {
            Ok(n) if n > MAX_SYNONYMS => {
                let err = DictError::TooManySynonyms {
                    max: MAX_SYNONYMS,
                    count: n,
                };
                return self.report(&err);
            }
            Ok(n) => n,
            Err(_) => {
                let err = DictError::InvalidInput(format!("'{}' is not a synonym count", count.trim()));
                return self.report(&err);
            }
        };

        let mut synonyms = Vec::with_capacity(count);
        for i in 0..count {
            let Some(synonym) = self.prompt(&format!("Enter synonym {}: ", i + 1))? else {
                return Ok(());
            };
            synonyms.push(synonym);
        }

        let entry = match Entry::new(word, definition, synonyms) {
            Ok(entry) => entry,
            Err(e) => return self.report(&e),
        };
        // an entry the file encoding cannot hold would fail every later flush
        if let Err(e) = encode_text(&codec::format_entry(&entry), self.storage.encoding) {
            return self.report(&e);
        }

        self.dict.add(entry);
        self.flush()?;
        writeln!(self.output, "Word added successfully.")?;
        Ok(())
    }

    fn remove_word(&mut self) -> Result<()> {
        let Some(word) = self.prompt("Enter the word to remove: ")? else {
            return Ok(());
        };
        let removed = self.dict.remove(&word);
        self.flush()?;
        if removed {
            writeln!(self.output, "Word removed successfully.")?;
        } else {
            writeln!(self.output, "Word not found in dictionary.")?;
        }
        Ok(())
    }

    fn search_word(&mut self) -> Result<()> {
        let Some(word) = self.prompt("Enter the word to search: ")? else {
            return Ok(());
        };
        match self.dict.get(&word) {
            Ok(entry) => writeln!(self.output, "Definition: {}", entry.definition())?,
            Err(e) => {
                debug!("{}", e);
                writeln!(self.output, "Word not found.")?
            }
        }
        Ok(())
    }

    fn search_synonyms(&mut self) -> Result<()> {
        let Some(word) = self.prompt("Enter the word to search synonyms: ")? else {
            return Ok(());
        };
        match self.dict.lookup_synonyms(&word) {
            Some([]) => writeln!(self.output, "Synonyms: No synonyms found.")?,
            Some(synonyms) => writeln!(self.output, "Synonyms: {}", synonyms.join(" "))?,
            None => writeln!(self.output, "No synonyms found for the word.")?,
        }
        Ok(())
    }

    /// Write the dictionary to disk; failures are reported, not returned
    fn flush(&mut self) -> Result<()> {
        if let Err(e) = codec::save(&self.dict, &self.storage.path, self.storage.encoding) {
            error!(path = %self.storage.path.display(), "failed to save dictionary: {}", e);
            writeln!(self.output, "Error saving dictionary: {}", e)?;
        }
        Ok(())
    }

    fn report(&mut self, err: &DictError) -> Result<()> {
        debug!("rejected input: {}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }
}
