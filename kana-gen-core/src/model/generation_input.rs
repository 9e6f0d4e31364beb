/// Default cap on rejected draws at a single position before a generation
/// call gives up and reports the constraints as unsatisfiable.
pub const DEFAULT_MAX_DRAWS: usize = 100_000;

/// Default native unit for the vowel-extension marker.
pub const DEFAULT_EXTENSION_MARKER: &str = "ー";

/// Input parameters for generating a single word.
///
/// `GenerationInput` replaces the original program's process-wide constants
/// with an explicit structure passed into the generator and the corpus
/// builder at call time.
///
/// # Responsibilities
/// - Track the target length (`word_length`, in position units)
/// - Track the start/end rules and the prohibited start prefixes
/// - Provide the validation predicates used by the generator
///
/// # Invariants
/// - `starts_with`, `ends_with` and `prohibited_starts` are stored
///   lowercase; all checks are case-insensitive
/// - An empty `starts_with` / `ends_with` matches everything
#[derive(Clone, Debug)]
pub struct GenerationInput {
	/// Target word length, measured in position units.
	pub word_length: usize,

	/// Cap on rejected draws at one position before giving up.
	pub max_draws: usize,

	/// Native unit treated as the vowel-extension marker.
	pub extension_marker: String,

	/// Required romaji prefix of the first unit (lowercase).
	starts_with: String,

	/// Required romaji suffix of the final unit (lowercase).
	ends_with: String,

	/// Romaji prefixes no word may start with (lowercase).
	prohibited_starts: Vec<String>,
}

impl GenerationInput {
	/// Creates an input with the given target length and no start/end rules.
	pub fn new(word_length: usize) -> Self {
		Self {
			word_length,
			max_draws: DEFAULT_MAX_DRAWS,
			extension_marker: DEFAULT_EXTENSION_MARKER.to_owned(),
			starts_with: String::new(),
			ends_with: String::new(),
			prohibited_starts: Vec::new(),
		}
	}

	/// Sets the required start prefix. Stored lowercase.
	pub fn set_starts_with(&mut self, prefix: &str) {
		self.starts_with = prefix.to_lowercase();
	}

	/// Sets the required end suffix. Stored lowercase.
	pub fn set_ends_with(&mut self, suffix: &str) {
		self.ends_with = suffix.to_lowercase();
	}

	/// Sets the prohibited start prefixes. Stored lowercase.
	pub fn set_prohibited_starts<I, S>(&mut self, prefixes: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		self.prohibited_starts = prefixes
			.into_iter()
			.map(|p| p.as_ref().to_lowercase())
			.collect();
	}

	/// Whether a romaji value may open a word.
	///
	/// True when it starts with the required prefix and with none of the
	/// prohibited prefixes (all case-insensitive).
	pub(crate) fn is_valid_start(&self, romaji: &str) -> bool {
		let lower = romaji.to_lowercase();
		lower.starts_with(&self.starts_with)
			&& !self
				.prohibited_starts
				.iter()
				.any(|p| lower.starts_with(p.as_str()))
	}

	/// Whether a romaji value may close a word (case-insensitive).
	pub(crate) fn is_valid_end(&self, romaji: &str) -> bool {
		romaji.to_lowercase().ends_with(&self.ends_with)
	}
}
