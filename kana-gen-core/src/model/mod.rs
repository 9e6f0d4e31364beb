//! Top-level module for the kana word generation system.
//!
//! This crate provides a constrained pseudo-word generator, including:
//! - The kana→romaji mapping (`UnitTable`)
//! - Generation parameters (`GenerationInput`)
//! - The rejection-sampling generator (`generator`)
//! - Corpus building with deduplication and shuffling (`corpus`)

/// Corpus builder: repeated generation, deduplication, attempt ceiling,
/// progress notifications and final shuffle.
pub mod corpus;

/// Generation parameter structure.
///
/// Stores the target length, the start/end rules and the prohibited start
/// prefixes, and provides the validation predicates over romaji strings.
pub mod generation_input;

/// Rejection-sampling word generation.
///
/// Draws units uniformly from the table and enforces positional adjacency
/// rules, including the vowel-extension marker substitution.
pub mod generator;

/// Kana→romaji unit table loaded from mapping files.
pub mod unit_table;

/// The generated word type (kana form plus romaji form).
pub mod word;
