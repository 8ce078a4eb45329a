//! Command-line interface for rust-wordbook
//!
//! Usage:
//!   wordbook-cli [--file <path>] [--encoding <name>] [--log-level <level>]

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_wordbook::{codec, Encoding, Session, Storage};

#[derive(Parser)]
#[command(name = "wordbook-cli", about = "Interactive word, definition and synonym dictionary")]
struct Cli {
    /// Dictionary file
    #[arg(long, default_value = "dictionary.txt")]
    file: PathBuf,
    /// Text encoding of the dictionary file (utf-8, gb18030, big5)
    #[arg(long, default_value = "utf-8")]
    encoding: Encoding,
    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let (dict, report) = match codec::load(&cli.file, cli.encoding) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error opening dictionary file: {}", e);
            process::exit(1);
        }
    };

    for notice in report.notices(cli.encoding) {
        println!("{}", notice);
    }

    let storage = Storage::new(&cli.file, cli.encoding);
    let stdin = io::stdin();
    let mut session = Session::new(dict, storage, stdin.lock(), io::stdout());
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
