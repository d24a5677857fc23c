/// Placeholder token filling a window before any real token has been read.
///
/// Two ASCII double quotes: whitespace tokenization never yields an empty
/// token, and existing table files already use this exact marker.
pub const SENTINEL: &str = "\"\"";

/// Sliding window over the last `len` tokens of a stream.
///
/// A `Prefix` is the context of the Markov chain: the key under which the
/// following token (the suffix) is recorded or looked up.
///
/// # Invariants
/// - The window always holds exactly `len` tokens
/// - A fresh window is filled with [`SENTINEL`]
/// - `len == 0` is valid: the key is always `""` and shifting is a no-op
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prefix {
	tokens: Vec<String>,
}

impl Prefix {
	/// Creates the start window of `len` sentinel tokens.
	pub fn new(len: usize) -> Self {
		Self { tokens: vec![SENTINEL.to_owned(); len] }
	}

	/// Number of tokens in the window.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` for a zero-length window.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Tokens in order, oldest first.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Drops the oldest token and appends `token` at the end.
	pub fn shift(&mut self, token: &str) {
		if self.tokens.is_empty() {
			return;
		}
		self.tokens.rotate_left(1);
		if let Some(last) = self.tokens.last_mut() {
			last.clear();
			last.push_str(token);
		}
	}

	/// Canonical map key: the tokens joined by a single space.
	pub fn key(&self) -> String {
		self.tokens.join(" ")
	}
}
