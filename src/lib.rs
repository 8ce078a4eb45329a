//! Rust word dictionary with synonyms and flat-file persistence
//!
//! Words are indexed in a fixed-size chained hash table and stored on disk
//! as one `word:definition:synonym,...,` line per entry.
//!
//! # Example
//! ```no_run
//! use rust_wordbook::{codec, Dictionary, Encoding};
//!
//! let (mut dict, _report) = codec::load("dictionary.txt", Encoding::Utf8).unwrap();
//! dict.insert("cat", "a small domesticated feline", ["feline", "kitty"]).unwrap();
//! if let Some(entry) = dict.lookup("cat") {
//!     println!("Definition: {}", entry.definition());
//! }
//! codec::save(&dict, "dictionary.txt", Encoding::Utf8).unwrap();
//! ```

mod error;
mod types;
mod utils;
mod store;
pub mod codec;
pub mod session;

pub use error::{DictError, Result};
pub use types::*;
pub use store::Dictionary;
pub use session::{Action, Session, Storage};
pub use utils::hash_word;
