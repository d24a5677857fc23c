//! # Error Types

/// Errors from Markov chain operations.
#[derive(Debug, thiserror::Error)]
pub enum MarkovError {
	/// Invalid caller-supplied value (prefix length, word count, ...).
	#[error("invalid argument: {0}")]
	Argument(String),

	/// I/O error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// A table file violates the line format.
	#[error("format error on line {line}: {reason}")]
	Format {
		/// 1-based line number in the table file.
		line: usize,
		/// What is wrong with the line.
		reason: String,
	},

	/// Two tables with different prefix lengths cannot be combined.
	#[error("prefix length mismatch: expected {expected}, found {found}")]
	PrefixLenMismatch {
		/// Prefix length of the receiving table.
		expected: usize,
		/// Prefix length of the other table.
		found: usize,
	},
}

impl MarkovError {
	pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
		MarkovError::Format { line, reason: reason.into() }
	}
}

/// Result type for Markov chain operations.
pub type Result<T> = std::result::Result<T, MarkovError>;
