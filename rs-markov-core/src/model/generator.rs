use rand::Rng;

use super::chain::ExpandedChain;
use super::prefix::Prefix;

/// Source of uniformly distributed indices.
///
/// The generator never touches a global random number generator: the
/// caller hands it a `Selector`. Any [`rand::Rng`] is a `Selector`, and
/// [`FixedSelector`] replays a fixed list of indices.
pub trait Selector {
	/// Returns an index in `[0, len)`. `len` is never 0.
	fn select(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Selector for R {
	fn select(&mut self, len: usize) -> usize {
		self.random_range(0..len)
	}
}

/// Deterministic [`Selector`] replaying a list of indices.
///
/// Each index is reduced modulo the requested length, and the list starts
/// over once exhausted. An empty list always selects 0.
#[derive(Clone, Debug, Default)]
pub struct FixedSelector {
	indices: Vec<usize>,
	position: usize,
}

impl FixedSelector {
	/// Creates a selector replaying `indices` from the first one.
	pub fn new(indices: Vec<usize>) -> Self {
		Self { indices, position: 0 }
	}
}

impl Selector for FixedSelector {
	fn select(&mut self, len: usize) -> usize {
		if self.indices.is_empty() {
			return 0;
		}
		let index = self.indices[self.position % self.indices.len()];
		self.position += 1;
		index % len
	}
}

/// Bounded random walk over an [`ExpandedChain`].
///
/// # Behavior
/// - Starts from the sentinel-filled prefix.
/// - At each step, picks one suffix of the current prefix uniformly at
///   random, emits it and shifts it into the prefix.
/// - Stops after `n` tokens, or as soon as the current prefix has no
///   suffix (the chain is exhausted).
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
	chain: &'a ExpandedChain,
}

impl<'a> Generator<'a> {
	/// Creates a generator borrowing `chain`.
	pub fn new(chain: &'a ExpandedChain) -> Self {
		Self { chain }
	}

	/// Generates at most `n` tokens.
	///
	/// # Returns
	/// The emitted tokens in order. Fewer than `n` tokens means the walk
	/// reached a prefix with no recorded continuation.
	pub fn generate<S: Selector + ?Sized>(&self, n: usize, selector: &mut S) -> Vec<String> {
		let mut prefix = Prefix::new(self.chain.prefix_len());
		// `n` is only an upper bound, the walk usually stops much earlier.
		let mut words = Vec::new();

		while words.len() < n {
			let choices = match self.chain.get(&prefix.key()) {
				Some(choices) if !choices.is_empty() => choices,
				_ => {
					log::debug!("chain exhausted after {} tokens", words.len());
					break;
				}
			};
			let next = &choices[selector.select(choices.len())];
			prefix.shift(next);
			words.push(next.clone());
		}

		words
	}

	/// Generates at most `n` tokens joined by single spaces.
	pub fn generate_text<S: Selector + ?Sized>(&self, n: usize, selector: &mut S) -> String {
		self.generate(n, selector).join(" ")
	}
}
