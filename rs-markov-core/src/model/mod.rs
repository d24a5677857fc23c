//! Top-level module for the Markov chain system.
//!
//! This module groups:
//! - The sliding context window (`Prefix`)
//! - Frequency accounting over token streams (`FrequencyTable`)
//! - The on-disk table format (`codec`)
//! - Count expansion into samplable sequences (`ExpandedChain`)
//! - The bounded random walk (`Generator`)

/// Fixed-length token window used as the chain context.
pub mod prefix;

/// Prefix to suffix occurrence counts.
///
/// Handles stream ingestion, count accumulation and table merging.
pub mod frequency_table;

/// Deterministic line-oriented encoding of a `FrequencyTable`.
pub mod codec;

/// Per-prefix suffix sequences whose multiplicities mirror the counts.
pub mod chain;

/// Random walk over an `ExpandedChain`.
///
/// Randomness is injected through the `Selector` trait so that generation
/// can be made deterministic.
pub mod generator;
