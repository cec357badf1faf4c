//! bendec translates Bencode, the serialization format used by BitTorrent
//! metainfo files, into a tree of typed values.
//!
//! The translation runs in two stages. The [parser::Scanner] reads the input
//! one line at a time and produces a token sequence. The [parser::Parser]
//! walks that sequence with a recursive descent and builds [Expr] trees,
//! enforcing balanced containers and unique, lexicographically sorted
//! dictionary keys. Malformed input aborts the stage at the first violation:
//! a formatted diagnostic goes to the injected [Report] sink and no partial
//! result is returned. Bencode offers no meaningful best-effort mode since a
//! single bad length prefix desynchronizes every later offset.
//!
//! Both stages are synchronous single-pass algorithms; encoding back to
//! Bencode and torrent-specific field semantics are out of scope.

mod expr;
pub mod parser;
mod report;

pub use expr::Expr;
pub use report::BufferedReporter;
pub use report::ConsoleReporter;
pub use report::Report;

use crate::parser::Parser;
use crate::parser::Scanner;
use anyhow::Result;
use std::io::BufRead;
use tracing::debug;
use tracing::subscriber::SetGlobalDefaultError;
use tracing::Level;

/// Scan and parse the whole input with a shared diagnostic sink.
pub fn translate<R: BufRead>(reader: R, reporter: &mut dyn Report) -> Result<Vec<Expr>> {
    let tokens = Scanner::scan(reader, reporter)?;
    debug!("scanned {} tokens", tokens.len());
    let expressions = Parser::parse(tokens, reporter)?;
    debug!("parsed {} top-level expressions", expressions.len());
    Ok(expressions)
}

pub fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_test_writer()
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
