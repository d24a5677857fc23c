//! # Frequency table file format
//!
//! Lines are:
//! ```text
//! {PREFIX_LEN}
//! {PREFIX TOKENS...} {SUFFIX} {COUNT} {SUFFIX} {COUNT} ...
//! ```
//!
//! Data lines are sorted by prefix key and suffixes are sorted within a
//! line, so encoding the same table always yields the same bytes.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use super::frequency_table::{FrequencyTable, SuffixCounts};
use crate::error::{MarkovError, Result};
use crate::io::{create_writer, open_reader, split_tokens};

/// Load a [`FrequencyTable`] from a table file.
///
/// # Arguments
/// * `path` - the path to the table file.
pub fn load_table_path<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
	let path = path.as_ref();
	let table = read_table(open_reader(path)?)?;
	log::info!("loaded {} prefixes from {}", table.len(), path.display());
	Ok(table)
}

/// Read a [`FrequencyTable`] from a table line reader.
///
/// Nothing is returned unless the whole input is valid.
///
/// # Errors
/// - [`MarkovError::Format`] for a missing or non-numeric header, a data line
///   shorter than the prefix, a line without suffix pairs, an unpaired
///   trailing field or a count that is not a non-negative integer.
/// - [`MarkovError::Io`] if reading fails.
pub fn read_table<R: BufRead>(reader: R) -> Result<FrequencyTable> {
	let mut lines = reader.lines().enumerate();

	// Blank lines are skipped wherever they appear, before the header too.
	let mut header = None;
	for (index, line) in lines.by_ref() {
		let line = line?;
		if !line.trim().is_empty() {
			header = Some((index + 1, line));
			break;
		}
	}
	let Some((header_line, header)) = header else {
		return Err(MarkovError::format(1, "missing prefix length"));
	};
	let prefix_len: usize = header
		.trim()
		.parse()
		.map_err(|e: std::num::ParseIntError| {
			MarkovError::format(header_line, format!("invalid prefix length {:?}: {e}", header.trim()))
		})?;

	let mut entries: HashMap<String, SuffixCounts> = HashMap::new();
	for (index, line) in lines {
		let line = line?;
		let line_number = index + 1;

		let fields: Vec<&str> = split_tokens(&line).collect();
		if fields.is_empty() {
			continue;
		}
		if fields.len() < prefix_len {
			return Err(MarkovError::format(
				line_number,
				format!("expected {prefix_len} prefix tokens, found {}", fields.len()),
			));
		}

		let (prefix, pairs) = fields.split_at(prefix_len);
		if pairs.is_empty() {
			return Err(MarkovError::format(line_number, "prefix has no suffixes"));
		}
		if pairs.len() % 2 != 0 {
			return Err(MarkovError::format(line_number, "odd number of suffix fields"));
		}

		let mut suffixes = SuffixCounts::with_capacity(pairs.len() / 2);
		for pair in pairs.chunks_exact(2) {
			let count: usize = pair[1].parse().map_err(|e: std::num::ParseIntError| {
				MarkovError::format(line_number, format!("invalid count {:?}: {e}", pair[1]))
			})?;
			suffixes.insert(pair[0].to_owned(), count);
		}

		let key = prefix.join(" ");
		if entries.insert(key, suffixes).is_some() {
			log::warn!("line {line_number}: duplicate prefix replaces the earlier entry");
		}
	}

	Ok(FrequencyTable::from_entries(prefix_len, entries))
}

/// Save a [`FrequencyTable`] to a table file, replacing any existing file.
///
/// # Arguments
/// * `table` - the table to save.
/// * `path` - the path to save the table to.
pub fn save_table_path<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> Result<()> {
	let path = path.as_ref();
	let mut writer = create_writer(path)?;
	write_table(table, &mut writer)?;
	writer.flush()?;
	log::info!("saved {} prefixes to {}", table.len(), path.display());
	Ok(())
}

/// Write a [`FrequencyTable`] to a [`Write`] writer.
///
/// # Arguments
/// * `table` - the table to save.
/// * `writer` - the writer to target.
pub fn write_table<W: Write>(table: &FrequencyTable, writer: &mut W) -> Result<()> {
	writeln!(writer, "{}", table.prefix_len())?;

	for key in table.prefixes() {
		let Some(suffixes) = table.get(key) else { continue };

		let mut items: Vec<(&String, &usize)> = suffixes.iter().collect();
		items.sort_unstable_by(|a, b| a.0.cmp(b.0));

		write!(writer, "{key}")?;
		for (suffix, count) in items {
			write!(writer, " {suffix} {count}")?;
		}
		writeln!(writer)?;
	}

	Ok(())
}

/// Encodes a table into its file representation.
pub fn encode_to_string(table: &FrequencyTable) -> String {
	let mut buffer = Vec::new();
	write_table(table, &mut buffer).expect("writing into a Vec cannot fail");
	String::from_utf8(buffer).expect("tokens and counts are valid UTF-8")
}

#[cfg(test)]
mod tests {
	use std::io::Cursor;

	use super::*;

	fn decode(text: &str) -> Result<FrequencyTable> {
		read_table(Cursor::new(text))
	}

	#[test]
	fn test_encode_is_sorted() {
		let mut table = FrequencyTable::new(1);
		table.add_text("b a b c b a");

		let expected = "1\n\"\" b 1\na b 1\nb a 2 c 1\nc b 1\n";
		assert_eq!(encode_to_string(&table), expected);
	}

	#[test]
	fn test_zero_prefix_len_lines_start_with_space() {
		let mut table = FrequencyTable::new(0);
		table.add_text("y x y");
		assert_eq!(encode_to_string(&table), "0\n x 1 y 2\n");
		assert_eq!(decode("0\n x 1 y 2\n").unwrap(), table);
	}

	#[test]
	fn test_round_trip() {
		let mut table = FrequencyTable::new(2);
		table.add_text("I am not a number I am a free man");
		table.add_text("a free man is not a number");

		let decoded = decode(&encode_to_string(&table)).unwrap();
		assert_eq!(decoded, table);
	}

	#[test]
	fn test_header_only_is_empty_model() {
		let table = decode("3\n").unwrap();
		assert_eq!(table.prefix_len(), 3);
		assert!(table.is_empty());
	}

	#[test]
	fn test_blank_lines_are_skipped() {
		let table = decode("1\n\nx y 2\n\n").unwrap();
		assert_eq!(table.count("x", "y"), 2);
		assert_eq!(table.len(), 1);
	}

	#[test]
	fn test_leading_blank_lines_are_skipped() {
		let table = decode("\n  \n2\n\na b c 3\n").unwrap();
		assert_eq!(table.prefix_len(), 2);
		assert_eq!(table.count("a b", "c"), 3);

		match decode("\n\n1\nx y z\n") {
			Err(MarkovError::Format { line, .. }) => assert_eq!(line, 4),
			other => panic!("unexpected result: {other:?}"),
		}
		assert!(matches!(decode("\n\nnope\n"), Err(MarkovError::Format { line: 3, .. })));
		assert!(matches!(decode("\n \n"), Err(MarkovError::Format { line: 1, .. })));
	}

	#[test]
	fn test_encode_to_string_matches_writer() {
		let mut table = FrequencyTable::new(2);
		table.add_text("to be or not to be");

		let mut buffer = Vec::new();
		write_table(&table, &mut buffer).unwrap();
		assert_eq!(encode_to_string(&table).into_bytes(), buffer);
	}

	#[test]
	fn test_zero_count_is_accepted() {
		let table = decode("1\nx y 0\n").unwrap();
		assert_eq!(table.get("x").and_then(|s| s.get("y")), Some(&0));
	}

	#[test]
	fn test_rejects_odd_fields() {
		match decode("2\na b c 1\nd e f\n") {
			Err(MarkovError::Format { line, .. }) => assert_eq!(line, 3),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn test_rejects_bad_count() {
		for bad in ["1\nx y one\n", "1\nx y -1\n", "1\nx y 1.5\n"] {
			match decode(bad) {
				Err(MarkovError::Format { line, .. }) => assert_eq!(line, 2),
				other => panic!("unexpected result for {bad:?}: {other:?}"),
			}
		}
	}

	#[test]
	fn test_rejects_bad_header() {
		assert!(matches!(decode(""), Err(MarkovError::Format { line: 1, .. })));
		assert!(matches!(decode("two\n"), Err(MarkovError::Format { line: 1, .. })));
		assert!(matches!(decode("-2\n"), Err(MarkovError::Format { line: 1, .. })));
	}

	#[test]
	fn test_rejects_short_or_bare_prefix() {
		assert!(matches!(decode("3\na b\n"), Err(MarkovError::Format { line: 2, .. })));
		assert!(matches!(decode("2\na b\n"), Err(MarkovError::Format { line: 2, .. })));
	}

	#[test]
	fn test_duplicate_prefix_last_wins() {
		let table = decode("1\nx y 1\nx z 4\n").unwrap();
		assert_eq!(table.count("x", "y"), 0);
		assert_eq!(table.count("x", "z"), 4);
	}

	#[test]
	fn test_save_load_path() {
		let mut table = FrequencyTable::new(2);
		table.add_text("the cat sat on the mat the cat ran");

		tempdir::TempDir::new("table_test")
			.and_then(|dir| {
				let path = dir.path().join("cat.table");

				save_table_path(&table, &path).expect("Failed to save table");
				// Overwrites
				save_table_path(&table, &path).expect("Failed to save table");

				let loaded = load_table_path(&path).expect("Failed to load table");
				assert_eq!(loaded, table);

				Ok(())
			})
			.unwrap();
	}

	#[test]
	fn test_load_missing_file() {
		assert!(matches!(load_table_path("/no/such/table"), Err(MarkovError::Io(_))));
	}
}
