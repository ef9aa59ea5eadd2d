// Unit tests for the byte scanner, stop-word filtering, and tally helpers.
//
// Runs whole inputs through `tally` into a real FrequencyTable, and through
// a recording WordFrequencies implementation to check exactly what the
// scanner emits and in what order.

use std::io::Cursor;

use wordcloud::error::Result;
use wordcloud::frequency::table::FrequencyTable;
use wordcloud::frequency::traits::{SortOutcome, WordFrequencies};
use wordcloud::text::stopwords::StopWordSet;
use wordcloud::text::tokenizer::{tally, tally_chunk, tally_finish, ScanMode, Scanner};

/// Table that remembers every increment in order.
#[derive(Default)]
struct RecordingTable {
    seen: Vec<String>,
}

impl WordFrequencies for RecordingTable {
    fn frequency(&self, word: &str) -> u32 {
        self.seen.iter().filter(|w| *w == word).count() as u32
    }

    fn increment(&mut self, word: &str) {
        self.seen.push(word.to_string());
    }

    fn clear(&mut self) {
        self.seen.clear();
    }

    fn sort(&mut self) -> Result<SortOutcome> {
        Ok(SortOutcome::Sorted)
    }

    fn len(&self) -> usize {
        self.seen.len()
    }

    fn is_sorted(&self) -> bool {
        false
    }
}

fn record(input: &str, mode: ScanMode, stop: &StopWordSet) -> Vec<String> {
    let mut table = RecordingTable::default();
    tally(Cursor::new(input), mode, stop, &mut table, "test").unwrap();
    table.seen
}

fn count(input: &str, mode: ScanMode, stop: &StopWordSet) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    tally(Cursor::new(input), mode, stop, &mut table, "test").unwrap();
    table
}

// ============================================================
// Plain mode
// ============================================================

#[test]
fn plain_hello_dont_wait() {
    let table = count("Hello, don't wait!", ScanMode::Plain, &StopWordSet::empty());
    assert_eq!(table.len(), 3);
    assert_eq!(table.frequency("hello"), 1);
    assert_eq!(table.frequency("dont"), 1);
    assert_eq!(table.frequency("wait"), 1);
}

#[test]
fn plain_emits_in_stream_order() {
    assert_eq!(
        record("Hello, don't wait!", ScanMode::Plain, &StopWordSet::empty()),
        vec!["hello", "dont", "wait"]
    );
}

#[test]
fn mixed_case_collapses_to_one_word() {
    let table = count("Rust RUST rust rUsT", ScanMode::Plain, &StopWordSet::empty());
    assert_eq!(table.frequency("rust"), 4);
    assert_eq!(table.len(), 1);
}

#[test]
fn lone_apostrophes_produce_nothing() {
    assert!(record("'' ' '''", ScanMode::Plain, &StopWordSet::empty()).is_empty());
}

#[test]
fn input_without_trailing_delimiter_keeps_last_word() {
    assert_eq!(
        record("ends mid word", ScanMode::Plain, &StopWordSet::empty()),
        vec!["ends", "mid", "word"]
    );
}

#[test]
fn empty_input_records_nothing() {
    assert!(record("", ScanMode::Plain, &StopWordSet::empty()).is_empty());
}

// ============================================================
// Stop words
// ============================================================

#[test]
fn stop_words_are_excluded() {
    let stop = StopWordSet::from_words(["the", "a"]);
    let table = count("the cat and a cat", ScanMode::Plain, &stop);
    assert_eq!(table.frequency("cat"), 2);
    assert_eq!(table.frequency("and"), 1);
    assert_eq!(table.frequency("the"), 0);
    assert_eq!(table.frequency("a"), 0);
    assert_eq!(table.len(), 2);
}

#[test]
fn stop_words_match_after_normalization() {
    let stop = StopWordSet::from_words(["THE", "dont"]);
    let table = count("The end. Don't stop.", ScanMode::Plain, &stop);
    assert_eq!(table.frequency("end"), 1);
    assert_eq!(table.frequency("stop"), 1);
    assert_eq!(table.len(), 2);
}

#[test]
fn trailing_stop_word_is_filtered() {
    let stop = StopWordSet::from_words(["the"]);
    assert_eq!(record("over the", ScanMode::Plain, &stop), vec!["over"]);
}

// ============================================================
// HTML mode
// ============================================================

#[test]
fn html_tags_discarded_text_counted() {
    let table = count("<b>cat</b> cat dog", ScanMode::Html, &StopWordSet::empty());
    assert_eq!(table.len(), 2);
    assert_eq!(table.frequency("cat"), 2);
    assert_eq!(table.frequency("dog"), 1);
    assert_eq!(table.frequency("b"), 0);
}

#[test]
fn html_attributes_never_counted() {
    let html = r#"<a href="http://example.com/page" class='link'>visit</a> now"#;
    assert_eq!(
        record(html, ScanMode::Html, &StopWordSet::empty()),
        vec!["visit", "now"]
    );
}

#[test]
fn html_delimiter_before_tag_still_splits() {
    assert_eq!(
        record("one <br> two", ScanMode::Html, &StopWordSet::empty()),
        vec!["one", "two"]
    );
}

#[test]
fn html_stray_close_bracket_is_not_a_boundary() {
    assert_eq!(
        record("a>b", ScanMode::Html, &StopWordSet::empty()),
        vec!["ab"]
    );
}

#[test]
fn html_tag_between_letters_joins_them() {
    assert_eq!(
        record("<p>end</p><p>start</p>", ScanMode::Html, &StopWordSet::empty()),
        vec!["endstart"]
    );
}

#[test]
fn html_unterminated_tag_swallows_rest() {
    assert_eq!(
        record("visible <script if (a < b) { hidden }", ScanMode::Html, &StopWordSet::empty()),
        vec!["visible"]
    );
}

// ============================================================
// Chunked scanning (network path)
// ============================================================

#[test]
fn chunked_scan_matches_whole_scan() {
    let page = "<html><body>\n<p>The quick brown fox</p>\n<p>jumps over the lazy dog</p>\n</body></html>";
    let stop = StopWordSet::from_words(["the"]);

    let whole = record(page, ScanMode::Html, &stop);

    let mut chunked = RecordingTable::default();
    let mut scanner = Scanner::new(ScanMode::Html);
    let mut recorded = 0;
    for chunk in page.as_bytes().chunks(7) {
        recorded += tally_chunk(&mut scanner, chunk, &stop, &mut chunked);
    }
    recorded += tally_finish(&mut scanner, &stop, &mut chunked);

    assert_eq!(chunked.seen, whole);
    assert_eq!(recorded, whole.len());
    assert_eq!(
        whole,
        vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]
    );
}
