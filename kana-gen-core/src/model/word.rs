use std::fmt;

/// A generated pseudo-word.
///
/// Holds the native kana form and the accumulated romaji form. The romaji
/// side already contains the effective transliterations, i.e. the
/// extension-marker substitution has been applied before appending.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Word {
	kana: String,
	romaji: String,
}

impl Word {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Appends an accepted unit and its effective romaji.
	pub(crate) fn push(&mut self, unit: &str, romaji: &str) {
		self.kana.push_str(unit);
		self.romaji.push_str(romaji);
	}

	pub fn kana(&self) -> &str {
		&self.kana
	}

	pub fn romaji(&self) -> &str {
		&self.romaji
	}

	/// Combined representation, used as the uniqueness key and as the
	/// output line format.
	pub fn combined(&self) -> String {
		format!("{} {}", self.kana, self.romaji)
	}
}

impl fmt::Display for Word {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.kana, self.romaji)
	}
}
