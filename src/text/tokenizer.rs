// Byte-level word scanner.
//
// A word is a maximal run of ASCII letters, lowercased, with apostrophes
// dropped ("don't" → "dont"). Anything else is a boundary. In HTML mode the
// scanner also tracks whether it is inside a `<...>` tag and throws away
// everything it sees there, boundaries included.
//
// Multi-byte UTF-8 sequences are all >= 0x80, so scanning bytes gives the
// same words as scanning decoded characters.
//
// A `<` with no closing `>` swallows the rest of the input. That is a known
// limitation of the tag tracking, not something the scanner tries to repair.

use std::io::{self, BufReader, Bytes, Read};

use crate::error::{Result, WordCloudError};
use crate::frequency::traits::WordFrequencies;
use crate::text::stopwords::StopWordSet;

/// How markup is treated while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Every byte is text.
    Plain,
    /// Bytes between `<` and `>` are discarded.
    Html,
}

/// Incremental scanner state. Feed it bytes one at a time; it hands back a
/// word each time a boundary completes one.
#[derive(Debug, Clone)]
pub struct Scanner {
    mode: ScanMode,
    buffer: String,
    inside_tag: bool,
}

impl Scanner {
    pub fn new(mode: ScanMode) -> Self {
        Self {
            mode,
            buffer: String::new(),
            inside_tag: false,
        }
    }

    /// True while an HTML tag has been opened and not yet closed.
    pub fn inside_tag(&self) -> bool {
        self.inside_tag
    }

    /// Consume one byte. Returns a normalized word when `byte` ends one.
    pub fn push(&mut self, byte: u8) -> Option<String> {
        if self.mode == ScanMode::Html {
            match byte {
                b'<' => {
                    self.inside_tag = true;
                    return None;
                }
                b'>' => {
                    self.inside_tag = false;
                    return None;
                }
                _ if self.inside_tag => return None,
                _ => {}
            }
        }

        match byte {
            b'A'..=b'Z' | b'a'..=b'z' => {
                self.buffer.push(byte.to_ascii_lowercase() as char);
                None
            }
            b'\'' => None,
            _ => self.flush(),
        }
    }

    /// Signal end of input, returning the word still buffered (if any).
    pub fn finish(&mut self) -> Option<String> {
        self.inside_tag = false;
        self.flush()
    }

    /// Scan a whole chunk, yielding each word it completes.
    pub fn scan<'s>(&'s mut self, chunk: &'s [u8]) -> impl Iterator<Item = String> + 's {
        chunk.iter().filter_map(move |&b| self.push(b))
    }

    fn flush(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buffer))
        }
    }
}

/// Lazy sequence of stop-word-filtered words read from `R`.
///
/// Yields `Err` once if the underlying reader fails and then ends. The
/// reader is dropped (closed) together with the iterator.
pub struct Words<'a, R: Read> {
    bytes: Bytes<BufReader<R>>,
    scanner: Scanner,
    stop_words: &'a StopWordSet,
    finished: bool,
}

impl<'a, R: Read> Words<'a, R> {
    pub fn new(reader: R, mode: ScanMode, stop_words: &'a StopWordSet) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            scanner: Scanner::new(mode),
            stop_words,
            finished: false,
        }
    }
}

impl<R: Read> Iterator for Words<'_, R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.bytes.next() {
                Some(Ok(byte)) => {
                    if let Some(word) = self.scanner.push(byte) {
                        if !self.stop_words.contains(&word) {
                            return Some(Ok(word));
                        }
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return self
                        .scanner
                        .finish()
                        .filter(|w| !self.stop_words.contains(w))
                        .map(Ok);
                }
            }
        }
    }
}

/// Scan `reader` to the end and add every surviving word to `table`.
///
/// Returns the number of words recorded. Read failures are reported as
/// `SourceReadFailure` against `source_name`. The table is not sorted here;
/// callers sort once after the whole source is consumed.
pub fn tally<R: Read>(
    reader: R,
    mode: ScanMode,
    stop_words: &StopWordSet,
    table: &mut impl WordFrequencies,
    source_name: &str,
) -> Result<usize> {
    let mut recorded = 0;
    for word in Words::new(reader, mode, stop_words) {
        let word = word.map_err(|e| WordCloudError::SourceReadFailure {
            source_name: source_name.to_string(),
            cause: e.to_string(),
        })?;
        table.increment(&word);
        recorded += 1;
    }
    Ok(recorded)
}

/// Feed one network chunk through `scanner` into `table`, skipping stop
/// words. Returns the number of words recorded.
pub fn tally_chunk(
    scanner: &mut Scanner,
    chunk: &[u8],
    stop_words: &StopWordSet,
    table: &mut impl WordFrequencies,
) -> usize {
    let mut recorded = 0;
    for word in scanner.scan(chunk) {
        if !stop_words.contains(&word) {
            table.increment(&word);
            recorded += 1;
        }
    }
    recorded
}

/// Flush whatever `scanner` still holds at end of stream into `table`.
pub fn tally_finish(
    scanner: &mut Scanner,
    stop_words: &StopWordSet,
    table: &mut impl WordFrequencies,
) -> usize {
    match scanner.finish() {
        Some(word) if !stop_words.contains(&word) => {
            table.increment(&word);
            1
        }
        _ => 0,
    }
}
