//! Kana pseudo-word generation library.
//!
//! This crate provides a constrained random word generator including:
//! - A kana→romaji unit table loaded from mapping files
//! - Rejection-sampling word generation with positional adjacency rules
//! - A corpus builder producing deduplicated, shuffled word lists
//! - Internal utilities for I/O and path handling
//!
//! Only the high-level API is exposed publicly. Low-level helpers live in
//! `io` and are shared with the CLI front-end.

/// Core generation logic: unit table, generator, corpus builder.
///
/// This module exposes the generation interface while keeping internal
/// bookkeeping (the last-accepted-unit accumulator) private.
pub mod model;

/// I/O utilities (encoding-fallback file reads, path helpers).
pub mod io;
