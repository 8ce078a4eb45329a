//! Utility functions for hashing and text encoding

use crate::error::{DictError, Result};
use crate::types::Encoding;
use encoding_rs::{BIG5, GB18030, UTF_8};

/// Rolling hash over the bytes of a word, reduced to a bucket index
///
/// `acc = acc * 32 + byte` in wrapping 32-bit arithmetic.
pub fn hash_word(word: &str, buckets: usize) -> usize {
    let acc = word
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_shl(5).wrapping_add(b as u32));
    acc as usize % buckets
}

fn codec_for(encoding: Encoding) -> &'static encoding_rs::Encoding {
    match encoding {
        Encoding::Utf8 => UTF_8,
        Encoding::Gb18030 => GB18030,
        Encoding::Big5 => BIG5,
    }
}

/// Decode file bytes to a string
///
/// A byte order mark overrides `encoding`. Invalid sequences are replaced
/// and reported through the returned flag.
pub fn decode_text(bytes: &[u8], encoding: Encoding) -> (String, bool) {
    let (result, _, had_errors) = codec_for(encoding).decode(bytes);
    (result.into_owned(), had_errors)
}

/// Encode a string for writing to disk
pub fn encode_text(text: &str, encoding: Encoding) -> Result<Vec<u8>> {
    if encoding == Encoding::Utf8 {
        return Ok(text.as_bytes().to_vec());
    }
    let (result, _, had_errors) = codec_for(encoding).encode(text);
    if had_errors {
        Err(DictError::EncodingError(format!(
            "text cannot be represented in {}",
            encoding
        )))
    } else {
        Ok(result.into_owned())
    }
}
