//! Integration tests for rust-wordbook using dictionary files on disk

use std::fs;
use std::io::Cursor;

use rust_wordbook::{codec, DictError, Dictionary, Encoding, Session, Storage, MAX_SYNONYMS};
use tempfile::TempDir;

fn sample_dictionary() -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("cat", "a small domesticated feline", ["feline", "kitty"])
        .unwrap();
    dict.insert("dog", "canine", Vec::<String>::new()).unwrap();
    dict.insert("happy", "feeling or showing pleasure", ["glad", "joyful", "cheerful"])
        .unwrap();
    dict
}

fn tuples(dict: &Dictionary) -> Vec<(String, String, Vec<String>)> {
    let mut all: Vec<_> = dict
        .iter()
        .map(|e| (e.word().to_string(), e.definition().to_string(), e.synonyms().to_vec()))
        .collect();
    all.sort();
    all
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let (dict, report) = codec::load(dir.path().join("absent.txt"), Encoding::Utf8)
        .expect("missing file should not be an error");
    assert!(dict.is_empty());
    assert!(!report.file_found);
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let dict = sample_dictionary();

    codec::save(&dict, &path, Encoding::Utf8).unwrap();
    let (loaded, report) = codec::load(&path, Encoding::Utf8).unwrap();

    assert!(report.file_found);
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(tuples(&loaded), tuples(&dict));
    assert_eq!(loaded.lookup_synonyms("dog"), Some(&[][..]));
}

#[test]
fn test_saved_line_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let mut dict = Dictionary::new();
    dict.insert("cat", "a small domesticated feline", ["feline", "kitty"])
        .unwrap();

    codec::save(&dict, &path, Encoding::Utf8).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "cat:a small domesticated feline:feline,kitty,\n"
    );
}

#[test]
fn test_save_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");

    codec::save(&sample_dictionary(), &path, Encoding::Utf8).unwrap();
    let mut small = Dictionary::new();
    small.insert("dog", "canine", Vec::<String>::new()).unwrap();
    codec::save(&small, &path, Encoding::Utf8).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "dog:canine:\n");
}

#[test]
fn test_duplicates_survive_reload_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let mut dict = Dictionary::new();
    dict.insert("bank", "edge of a river", Vec::<String>::new()).unwrap();
    dict.insert("bank", "financial institution", ["lender"]).unwrap();

    codec::save(&dict, &path, Encoding::Utf8).unwrap();
    let (mut loaded, _) = codec::load(&path, Encoding::Utf8).unwrap();

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.lookup("bank").unwrap().definition(), "financial institution");
    assert!(loaded.remove("bank"));
    assert_eq!(loaded.lookup("bank").unwrap().definition(), "edge of a river");
}

#[test]
fn test_load_hand_written_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let synonyms: String = (1..=12).map(|i| format!("syn{},", i)).collect();
    let content = format!(
        "cat:a small domesticated feline:feline,kitty,\r\n\
         this line is broken\n\
         dog:canine:\n\
         many:lots of synonyms:{}\n",
        synonyms
    );
    fs::write(&path, content).unwrap();

    let (dict, report) = codec::load(&path, Encoding::Utf8).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.dropped_synonyms, 2);

    let cat = dict.lookup("cat").unwrap();
    assert_eq!(cat.synonyms(), ["feline", "kitty"]);
    assert_eq!(dict.lookup_synonyms("many").unwrap().len(), MAX_SYNONYMS);
}

#[test]
fn test_gb18030_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    let mut dict = Dictionary::new();
    dict.insert("猫", "一种小型家养动物", ["猫咪"]).unwrap();

    codec::save(&dict, &path, Encoding::Gb18030).unwrap();
    assert_ne!(fs::read(&path).unwrap(), codec::to_text(&dict).into_bytes());

    let (loaded, report) = codec::load(&path, Encoding::Gb18030).unwrap();
    assert!(!report.lossy);
    assert_eq!(loaded.lookup("猫").unwrap().definition(), "一种小型家养动物");
}

#[test]
fn test_save_to_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let result = codec::save(
        &sample_dictionary(),
        dir.path().join("missing").join("dictionary.txt"),
        Encoding::Utf8,
    );
    assert!(matches!(result, Err(DictError::Io(_))));
}

#[test]
fn test_session_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");

    let (dict, _) = codec::load(&path, Encoding::Utf8).unwrap();
    let script = "1\nhappy\nfeeling pleasure\n2\nglad\njoyful\n5\n";
    let mut session = Session::new(
        dict,
        Storage::new(&path, Encoding::Utf8),
        Cursor::new(script),
        Vec::<u8>::new(),
    );
    session.run().unwrap();

    let (dict, _) = codec::load(&path, Encoding::Utf8).unwrap();
    let script = "4\nhappy\n2\nhappy\n5\n";
    let mut session = Session::new(
        dict,
        Storage::new(&path, Encoding::Utf8),
        Cursor::new(script),
        Vec::<u8>::new(),
    );
    session.run().unwrap();
    let (dict, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();

    println!("{}", out);
    assert!(out.contains("Synonyms: glad joyful"));
    assert!(out.contains("Word removed successfully."));
    assert!(dict.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_load_invalid_bytes_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dictionary.txt");
    fs::write(&path, b"caf\xe9:coffee:\ndog:canine:\n").unwrap();

    let (dict, report) = codec::load(&path, Encoding::Utf8).unwrap();
    assert!(report.lossy);
    assert_eq!(report.loaded, 2);
    assert!(dict.contains("caf\u{FFFD}"));

    let notices = report.notices(Encoding::Utf8);
    println!("{:?}", notices);
    assert!(notices.iter().any(|n| n.contains("not valid utf-8")));
}
