use std::cmp::max;

use rand::prelude::IteratorRandom;
use thiserror::Error;

use crate::model::generation_input::GenerationInput;
use crate::model::unit_table::UnitTable;
use crate::model::word::Word;

/// Effective romaji substituted when the marker extends an o-vowel.
pub const LONG_O_EXTENSION: &str = "U";
/// At position 1, this unit must not be followed by an n-initial unit.
const U_VOWEL: &str = "う";
/// Past position 1, this unit must not be followed by a u-initial unit.
const TI_UNIT: &str = "ち";

/// Failure conditions of a single generation call.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GenerateError {
	#[error("unit table is empty")]
	EmptyTable,
	#[error("no unit satisfied the constraints at position {position} after {draws} draws")]
	ConstraintUnsatisfiable { position: usize, draws: usize },
}

/// Generates one word by rejection sampling.
///
/// At each position a (unit, romaji) pair is drawn uniformly from the
/// table and evaluated against the rules below, in order. Any failure
/// discards the draw and redraws at the same position; there is no
/// backtracking to earlier positions.
///
/// 1. Position 0: romaji must pass the start rules (required prefix,
///    prohibited prefixes).
/// 2. Position 1, previous unit `う`: reject an n-initial romaji.
/// 3. Position > 1, previous unit `ち`: reject a u-initial romaji.
/// 4. Reject a doubled extension marker (the marker unit is
///    `input.extension_marker`).
/// 5. A draw whose advancement reaches the target length exactly must pass
///    the end rule. The check uses the raw table romaji; for the marker
///    the substitution is applied only afterwards, matching the original
///    behavior.
///
/// A unit advances the position counter by its romaji length in chars
/// (minimum 1), so a single unit may cover several positions. A final
/// draw whose advancement overshoots the target is still accepted; the
/// overshoot is not checked.
///
/// Marker substitution: when the drawn unit is the extension marker and
/// the word already has content, the effective romaji is `U` if the
/// previously accepted romaji starts with `o` (case-insensitive), else
/// the previous romaji verbatim (vowel-lengthening).
///
/// # Errors
/// - `EmptyTable` when the table holds no units.
/// - `ConstraintUnsatisfiable` when `input.max_draws` consecutive draws
///   are rejected at one position.
pub fn generate(table: &UnitTable, input: &GenerationInput) -> Result<Word, GenerateError> {
	if table.is_empty() {
		return Err(GenerateError::EmptyTable);
	}

	let mut rng = rand::rng();

	let mut word = Word::new();
	// Last accepted (unit, effective romaji) pair; rules 2-4 and the
	// marker substitution consult it.
	let mut last: Option<(String, String)> = None;
	let mut position: usize = 0;
	let mut draws: usize = 0;

	while position < input.word_length {
		if draws >= input.max_draws {
			return Err(GenerateError::ConstraintUnsatisfiable { position, draws });
		}
		draws += 1;

		let (unit, romaji) = match table.iter().choose(&mut rng) {
			Some(entry) => entry,
			None => return Err(GenerateError::EmptyTable),
		};

		let last_unit = last.as_ref().map(|(u, _)| u.as_str());

		if position == 0 {
			// First unit needs to follow the start rules
			if !input.is_valid_start(romaji) {
				continue;
			}
		} else if position == 1 {
			// Second unit: if the first was "う", the next can't be "ん"
			if last_unit == Some(U_VOWEL) && starts_ci(romaji, "n") {
				continue;
			}
		} else if last_unit == Some(TI_UNIT) && starts_ci(romaji, "u") {
			// Later positions: "ち" followed by a u-initial unit
			continue;
		}

		let marker = input.extension_marker.as_str();

		// No doubled extension markers
		if unit == marker && last_unit == Some(marker) {
			continue;
		}

		let advance = max(1, romaji.chars().count());

		// Final position needs a proper ending (raw romaji, pre-substitution)
		if position + advance == input.word_length && !input.is_valid_end(romaji) {
			continue;
		}

		// Vowel-extension substitution
		let effective = if unit == marker {
			match &last {
				Some((_, prev)) if starts_ci(prev, "o") => LONG_O_EXTENSION.to_owned(),
				Some((_, prev)) => prev.clone(),
				None => romaji.to_owned(),
			}
		} else {
			romaji.to_owned()
		};

		word.push(unit, &effective);
		last = Some((unit.to_owned(), effective));
		position += advance;
		draws = 0;
	}

	Ok(word)
}

fn starts_ci(romaji: &str, prefix: &str) -> bool {
	romaji.to_lowercase().starts_with(prefix)
}
