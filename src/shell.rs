//! Interactive query loop.
//!
//! Reads one query per line, answers it and writes the matches one per line
//! followed by a blank separator line. The loop owns no search state; it only
//! drives a [`PrefixSearch`] until the input runs dry.

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::Level;

use crate::search::PrefixSearch;
use crate::timing::timed_at;

/// Printed once before the first query is read.
pub const READY_BANNER: &str = "Initialized. Enter a search string to try me out.";

/// Answers a single raw query: lower-cases it, then searches.
pub fn answer(search: &dyn PrefixSearch, raw_query: &str, limit: usize) -> Vec<String> {
    let query = raw_query.to_lowercase();
    let (matches, _) = timed_at(Level::DEBUG, "search", || {
        search.find_matches(&query, limit)
    });
    tracing::debug!(
        strategy = search.name(),
        query = %query,
        matches = matches.len(),
        "Query answered"
    );
    matches
}

/// Runs the query loop until `input` reaches end of file.
///
/// # Arguments
///
/// * `search` - The searcher answering queries.
/// * `limit` - Maximum matches per query.
/// * `input` - Source of queries, one per line.
/// * `output` - Sink for the banner and the matches.
///
/// # Returns
///
/// * `Ok(usize)` - Number of queries answered.
/// * `Err(std::io::Error)` - If reading a query or writing results fails.
pub fn run<R, W>(
    search: &dyn PrefixSearch,
    limit: usize,
    mut input: R,
    mut output: W,
) -> std::io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{READY_BANNER}")?;
    output.flush()?;

    let mut answered = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);
        for city in answer(search, &line, limit) {
            writeln!(output, "{city}")?;
        }
        writeln!(output)?;
        output.flush()?;
        answered += 1;
    }

    tracing::info!(queries = answered, "Input closed");
    Ok(answered)
}

/// Decodes one raw input line without its terminator.
///
/// Invalid UTF-8 is replaced rather than rejected so a single garbled line
/// cannot end the session.
fn decode_line(raw: &[u8]) -> Cow<'_, str> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = String::from_utf8_lossy(raw);
    if let Cow::Owned(_) = line {
        tracing::warn!(line = %line, "Query is not valid UTF-8, invalid bytes replaced");
    }
    line
}
