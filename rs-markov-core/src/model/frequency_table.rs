use std::borrow::Cow;
use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use super::prefix::Prefix;
use crate::error::{MarkovError, Result};
use crate::io::{open_reader, split_tokens};

/// Occurrence count of every suffix observed after one prefix.
///
/// Example: { "not" => 1, "a" => 1 }
pub type SuffixCounts = HashMap<String, usize>;

/// Word-level frequency table of an order-`prefix_len` Markov chain.
///
/// The `FrequencyTable` maps each prefix key (the `prefix_len` previous
/// tokens joined by a space) to the suffixes observed right after it,
/// together with how many times each one was seen.
///
/// # Responsibilities
/// - Ingest token streams, one independent stream at a time
/// - Accumulate suffix counts for each prefix
/// - Merge with another table of the same `prefix_len`
///
/// # Invariants
/// - `prefix_len` never changes after construction
/// - Every key has exactly `prefix_len` space-separated tokens
/// - Ingestion only ever creates counts >= 1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	/// Number of tokens in every prefix.
	prefix_len: usize,

	/// Mapping from a prefix key to its suffix counts.
	entries: HashMap<String, SuffixCounts>,
}

impl FrequencyTable {
	/// Creates an empty table with prefixes of `prefix_len` tokens.
	pub fn new(prefix_len: usize) -> Self {
		Self { prefix_len, entries: HashMap::new() }
	}

	/// Builds a table from already decoded entries.
	///
	/// Used by the codec; counts are taken as-is (a decoded count may be 0).
	pub(crate) fn from_entries(prefix_len: usize, entries: HashMap<String, SuffixCounts>) -> Self {
		Self { prefix_len, entries }
	}

	/// Number of tokens in every prefix.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no prefix has been recorded.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Suffix counts recorded for a prefix key.
	pub fn get(&self, key: &str) -> Option<&SuffixCounts> {
		self.entries.get(key)
	}

	/// Count of `suffix` after the prefix `key`, 0 if never seen.
	pub fn count(&self, key: &str, suffix: &str) -> usize {
		self.entries
			.get(key)
			.and_then(|suffixes| suffixes.get(suffix))
			.copied()
			.unwrap_or(0)
	}

	/// Sum of every count in the table.
	pub fn total_count(&self) -> usize {
		self.entries.values().flat_map(|suffixes| suffixes.values()).sum()
	}

	/// Prefix keys in ascending lexicographic order.
	pub fn prefixes(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	/// Iterates over `(prefix key, suffix counts)` in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SuffixCounts)> {
		self.entries.iter().map(|(key, suffixes)| (key.as_str(), suffixes))
	}

	/// Records one occurrence of `suffix` after the prefix `key`.
	fn add_transition(&mut self, key: String, suffix: &str) {
		*self
			.entries
			.entry(key)
			.or_default()
			.entry(suffix.to_owned())
			.or_insert(0) += 1;
	}

	/// Adds every token of `text` as one independent stream.
	///
	/// Returns the number of tokens consumed.
	///
	/// # Notes
	/// - The window starts from the sentinel prefix, whatever was ingested before.
	/// - Counts accumulate with the ones already in the table.
	pub fn add_text(&mut self, text: &str) -> usize {
		let mut prefix = Prefix::new(self.prefix_len);
		let consumed = self.add_tokens(&mut prefix, split_tokens(text));
		log::debug!("ingested {consumed} tokens from text");
		consumed
	}

	/// Adds every token read from `reader` as one independent stream.
	///
	/// The reader is consumed line by line as raw bytes, the window is
	/// carried across line breaks. Returns the number of tokens consumed.
	///
	/// # Notes
	/// - Input does not have to be UTF-8: invalid byte sequences are replaced
	///   by U+FFFD and a warning names the line.
	///
	/// # Errors
	/// Returns [`MarkovError::Io`] if reading fails. Tokens read before the
	/// failure stay recorded.
	pub fn add_reader<R: BufRead>(&mut self, mut reader: R) -> Result<usize> {
		let mut prefix = Prefix::new(self.prefix_len);
		let mut consumed = 0;
		let mut buffer = Vec::new();
		let mut line_number = 0;
		loop {
			buffer.clear();
			if reader.read_until(b'\n', &mut buffer)? == 0 {
				break;
			}
			line_number += 1;

			let line = String::from_utf8_lossy(&buffer);
			if matches!(line, Cow::Owned(_)) {
				log::warn!("line {line_number}: invalid UTF-8 replaced by U+FFFD");
			}
			consumed += self.add_tokens(&mut prefix, split_tokens(&line));
		}
		log::debug!("ingested {consumed} tokens from stream");
		Ok(consumed)
	}

	/// Opens `filename` and adds its tokens as one independent stream.
	///
	/// # Errors
	/// Returns [`MarkovError::Io`] if the file cannot be opened or read.
	pub fn add_file<P: AsRef<Path>>(&mut self, filename: P) -> Result<usize> {
		let path = filename.as_ref();
		let consumed = self.add_reader(open_reader(path)?)?;
		log::info!("{}: {consumed} tokens, {} prefixes so far", path.display(), self.len());
		Ok(consumed)
	}

	fn add_tokens<'a, I>(&mut self, prefix: &mut Prefix, tokens: I) -> usize
	where
		I: Iterator<Item = &'a str>,
	{
		let mut consumed = 0;
		for token in tokens {
			self.add_transition(prefix.key(), token);
			prefix.shift(token);
			consumed += 1;
		}
		consumed
	}

	/// Merges another table into this one.
	///
	/// # Notes
	/// - Both tables must have the same `prefix_len`.
	/// - Counts for matching prefixes and suffixes are summed.
	///
	/// # Errors
	/// Returns [`MarkovError::PrefixLenMismatch`] if the prefix lengths differ.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.prefix_len != other.prefix_len {
			return Err(MarkovError::PrefixLenMismatch {
				expected: self.prefix_len,
				found: other.prefix_len,
			});
		}

		for (key, suffixes) in &other.entries {
			let existing = self.entries.entry(key.clone()).or_default();
			for (suffix, count) in suffixes {
				*existing.entry(suffix.clone()).or_insert(0) += *count;
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;
	use crate::model::prefix::SENTINEL;

	const TEXT: &str = "I am not a number I am a free man";

	fn start_key(len: usize) -> String {
		vec![SENTINEL; len].join(" ")
	}

	#[test]
	fn test_scenario_prefix_len_2() {
		let mut table = FrequencyTable::new(2);
		assert_eq!(table.add_text(TEXT), 10);

		assert_eq!(table.count("I am", "not"), 1);
		assert_eq!(table.count("I am", "a"), 1);
		assert_eq!(table.get("I am").map(|s| s.len()), Some(2));
		assert_eq!(table.get("am a"), Some(&SuffixCounts::from([("free".to_owned(), 1)])));
		assert_eq!(table.count(&start_key(2), "I"), 1);
		assert_eq!(table.count("\"\" I", "am"), 1);
		assert_eq!(table.len(), 9);
	}

	#[test]
	fn test_total_count_matches_tokens() {
		let mut table = FrequencyTable::new(3);
		let consumed = table.add_text("a b a b a b c  \n\t d");
		assert_eq!(consumed, 8);
		assert_eq!(table.total_count(), 8);
	}

	#[test]
	fn test_empty_stream() {
		let mut table = FrequencyTable::new(2);
		assert_eq!(table.add_text("   \n  "), 0);
		assert!(table.is_empty());
		assert_eq!(table.total_count(), 0);
	}

	#[test]
	fn test_window_resets_between_streams() {
		let mut table = FrequencyTable::new(1);
		table.add_text("one two");
		table.add_text("three");

		// "three" follows the sentinel, not "two"
		assert_eq!(table.count(SENTINEL, "three"), 1);
		assert_eq!(table.count("two", "three"), 0);
		assert_eq!(table.count(SENTINEL, "one"), 1);
	}

	#[test]
	fn test_reader_carries_window_across_lines() {
		let mut table = FrequencyTable::new(1);
		let consumed = table.add_reader(Cursor::new("alpha\nbeta\n\ngamma")).unwrap();
		assert_eq!(consumed, 3);
		assert_eq!(table.count("alpha", "beta"), 1);
		assert_eq!(table.count("beta", "gamma"), 1);
	}

	#[test]
	fn test_reader_accepts_invalid_utf8() {
		let mut table = FrequencyTable::new(1);
		let consumed = table.add_reader(Cursor::new(&b"caf\xe9 au\nlait caf\xe9"[..])).unwrap();
		assert_eq!(consumed, 4);
		assert_eq!(table.count(SENTINEL, "caf\u{FFFD}"), 1);
		assert_eq!(table.count("caf\u{FFFD}", "au"), 1);
		assert_eq!(table.count("au", "lait"), 1);
		assert_eq!(table.count("lait", "caf\u{FFFD}"), 1);
	}

	#[test]
	fn test_zero_prefix_len_shares_one_context() {
		let mut table = FrequencyTable::new(0);
		table.add_text("a b a");
		assert_eq!(table.prefixes(), vec![""]);
		assert_eq!(table.count("", "a"), 2);
		assert_eq!(table.count("", "b"), 1);
	}

	#[test]
	fn test_add_file_missing() {
		let mut table = FrequencyTable::new(2);
		let err = table.add_file("/definitely/not/here.txt").unwrap_err();
		assert!(matches!(err, MarkovError::Io(_)));
	}

	#[test]
	fn test_merge() {
		let mut a = FrequencyTable::new(1);
		a.add_text("x y");
		let mut b = FrequencyTable::new(1);
		b.add_text("x y z");

		a.merge(&b).unwrap();
		assert_eq!(a.count(SENTINEL, "x"), 2);
		assert_eq!(a.count("x", "y"), 2);
		assert_eq!(a.count("y", "z"), 1);
		assert_eq!(a.total_count(), 5);

		let c = FrequencyTable::new(2);
		assert!(matches!(
			a.merge(&c),
			Err(MarkovError::PrefixLenMismatch { expected: 1, found: 2 })
		));
	}

	#[test]
	fn test_prefixes_sorted() {
		let mut table = FrequencyTable::new(1);
		table.add_text("c b a");
		assert_eq!(table.prefixes(), vec!["\"\"", "b", "c"]);
	}
}
