//! Word-level Markov chain text generation library.
//!
//! This crate provides an order-k Markov chain toolkit including:
//! - Sliding prefix windows over whitespace-delimited tokens
//! - Frequency tables built from one or more text streams
//! - A deterministic, line-oriented table file format
//! - Expansion of frequency counts into samplable suffix sequences
//! - A bounded random walk generator with injectable randomness
//!
//! Components return [`MarkovError`] instead of aborting, so the calling
//! binary decides how to report failures.

/// Markov chain models, persistence and generation.
pub mod model;

/// Error type shared by all components.
pub mod error;

/// I/O utilities (buffered file readers and writers).
///
/// Not exposed
pub(crate) mod io;

pub use error::{MarkovError, Result};
pub use model::chain::ExpandedChain;
pub use model::codec::{encode_to_string, load_table_path, read_table, save_table_path, write_table};
pub use model::frequency_table::FrequencyTable;
pub use model::generator::{FixedSelector, Generator, Selector};
pub use model::prefix::{Prefix, SENTINEL};
