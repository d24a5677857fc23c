use std::collections::HashMap;
use std::io::Write;

use super::frequency_table::FrequencyTable;
use crate::error::Result;

/// Suffix sequences ready for uniform sampling.
///
/// Every suffix recorded for a prefix is repeated as many times as it was
/// counted, so picking a uniformly random element of the sequence picks a
/// suffix with probability proportional to its count.
///
/// An `ExpandedChain` is derived from a [`FrequencyTable`] and is read-only
/// once built: it may be shared by reference between generators.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedChain {
	prefix_len: usize,
	chain: HashMap<String, Vec<String>>,
}

impl ExpandedChain {
	/// Expands every prefix of `table`.
	///
	/// The table is left untouched, expanding it again yields an equal chain.
	/// Suffixes are laid out in ascending order, so two tables with the same
	/// counts expand to identical sequences whatever their map order.
	pub fn from_table(table: &FrequencyTable) -> Self {
		let mut chain = HashMap::with_capacity(table.len());
		for (key, suffixes) in table.iter() {
			let mut items: Vec<(&String, &usize)> = suffixes.iter().collect();
			items.sort_unstable_by(|a, b| a.0.cmp(b.0));

			let total: usize = items.iter().map(|(_, count)| **count).sum();
			let mut sequence = Vec::with_capacity(total);
			for (suffix, count) in items {
				sequence.extend(std::iter::repeat_n(suffix.clone(), *count));
			}
			chain.insert(key.to_owned(), sequence);
		}
		log::debug!("expanded {} prefixes", chain.len());
		Self { prefix_len: table.prefix_len(), chain }
	}

	/// Number of tokens in every prefix.
	pub fn prefix_len(&self) -> usize {
		self.prefix_len
	}

	/// Expanded suffixes of a prefix key.
	pub fn get(&self, key: &str) -> Option<&[String]> {
		self.chain.get(key).map(Vec::as_slice)
	}

	/// Number of distinct prefixes.
	pub fn len(&self) -> usize {
		self.chain.len()
	}

	/// Returns `true` if the chain has no prefix at all.
	pub fn is_empty(&self) -> bool {
		self.chain.is_empty()
	}

	/// Writes one line per prefix: the key followed by its expanded suffixes.
	///
	/// Prefixes and suffixes are sorted so the dump is reproducible.
	pub fn write_chain<W: Write>(&self, writer: &mut W) -> Result<()> {
		let mut keys: Vec<&String> = self.chain.keys().collect();
		keys.sort_unstable();

		for key in keys {
			let mut sequence: Vec<&str> = self.chain[key].iter().map(String::as_str).collect();
			sequence.sort_unstable();
			writeln!(writer, "{key} {}", sequence.join(" "))?;
		}
		Ok(())
	}
}

impl From<&FrequencyTable> for ExpandedChain {
	fn from(table: &FrequencyTable) -> Self {
		Self::from_table(table)
	}
}
