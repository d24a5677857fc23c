use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::io;

/// Opens a file for buffered line reading.
pub(crate) fn open_reader<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Creates (or truncates) a file for buffered writing.
///
/// The caller is responsible for flushing; errors raised by the final
/// flush would otherwise be swallowed by `Drop`.
pub(crate) fn create_writer<P: AsRef<Path>>(filename: P) -> io::Result<BufWriter<File>> {
	Ok(BufWriter::new(File::create(filename)?))
}

/// Splits a line into whitespace-delimited tokens.
///
/// Any run of whitespace is a single separator and empty tokens are never
/// produced.
pub(crate) fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
	line.split_whitespace()
}
