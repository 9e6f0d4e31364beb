use std::collections::HashSet;

use rand::seq::SliceRandom;

use crate::model::generation_input::GenerationInput;
use crate::model::generator::{self, GenerateError};
use crate::model::unit_table::UnitTable;
use crate::model::word::Word;

/// Number of accepted words between two progress notifications.
pub const PROGRESS_INTERVAL: usize = 1000;

/// Result of a corpus build.
#[derive(Clone, Debug)]
pub struct Corpus {
	/// Unique words, in shuffled order.
	pub words: Vec<Word>,
	/// Number of generation calls spent, successful or duplicate.
	pub attempts: usize,
	/// True when the attempt ceiling stopped the build before the target
	/// count was reached. Partial success, not an error.
	pub ceiling_reached: bool,
}

/// Builds a corpus without progress notifications.
///
/// See [`build_with_progress`].
pub fn build(
	table: &UnitTable,
	input: &GenerationInput,
	target_count: usize,
	attempt_ceiling: usize,
) -> Result<Corpus, GenerateError> {
	build_with_progress(table, input, target_count, attempt_ceiling, |_| {})
}

/// Builds a corpus of unique words.
///
/// # Behavior
/// - Calls the generator repeatedly; every call counts as one attempt,
///   whether or not the word is new.
/// - Uniqueness is keyed on the combined `"<kana> <romaji>"` string.
/// - Stops when `target_count` unique words are collected or the attempt
///   counter exceeds `attempt_ceiling`.
/// - Invokes `on_progress(unique_count)` every [`PROGRESS_INTERVAL`]
///   accepted words.
/// - Shuffles the result uniformly, so the output order carries no
///   information about generation order.
///
/// # Errors
/// Propagates the generator's errors (empty table, unsatisfiable
/// constraints).
pub fn build_with_progress<F: FnMut(usize)>(
	table: &UnitTable,
	input: &GenerationInput,
	target_count: usize,
	attempt_ceiling: usize,
	mut on_progress: F,
) -> Result<Corpus, GenerateError> {
	let mut seen: HashSet<String> = HashSet::new();
	let mut words: Vec<Word> = Vec::new();
	let mut attempts: usize = 0;
	let mut ceiling_reached = false;

	while words.len() < target_count {
		let word = generator::generate(table, input)?;

		if seen.insert(word.combined()) {
			words.push(word);

			if words.len() % PROGRESS_INTERVAL == 0 {
				on_progress(words.len());
			}
		}

		attempts += 1;
		if attempts > attempt_ceiling {
			ceiling_reached = true;
			break;
		}
	}

	words.shuffle(&mut rand::rng());

	Ok(Corpus {
		words,
		attempts,
		ceiling_reached,
	})
}
