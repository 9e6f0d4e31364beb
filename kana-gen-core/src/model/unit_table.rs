use std::collections::HashMap;
use std::path::Path;

use log::warn;

use crate::io;

/// Kana→romaji mapping used to assemble words.
///
/// # Responsibilities
/// - Merge mapping entries from a directory of `.txt` files
/// - Provide uniform access to the unit/romaji pairs for sampling
///
/// # Invariants
/// - Keys are unique; a later file wins on duplicate keys (files are
///   visited in sorted name order, so loading is deterministic)
/// - Read-only after construction
///
/// # Notes
/// Each non-blank mapping line is a one-entry JSON object, for example
/// `{"か": "ka"}`. Lines that fail to parse and files that fail to decode
/// (UTF-8, then Shift-JIS) are skipped with a logged warning.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UnitTable {
	units: HashMap<String, String>,
}

impl UnitTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a table by merging all `.txt` mapping files in a directory.
	///
	/// # Errors
	/// - Returns an error if the path does not exist or is not a directory.
	///
	/// # Notes
	/// - The directory path is normalized using `normalize_folder`.
	/// - Only files directly contained in the directory are loaded
	///   (subdirectories are ignored).
	/// - Unreadable files and malformed lines are skipped, not fatal.
	pub fn from_dir<P: AsRef<Path>>(folder: P) -> Result<Self, Box<dyn std::error::Error>> {
		let string_path = match folder.as_ref().to_str() {
			Some(s) => s,
			None => return Err("Invalid folder path".into()),
		};
		// Normalize "folder" / "folder/"
		let folder = io::normalize_folder(string_path);

		if !folder.is_dir() {
			return Err(format!("Expected a directory, got: {}", folder.display()).into());
		}

		let mut table = Self::new();
		for file in io::list_files(&folder, "txt")? {
			let lines = match io::read_lines(&file) {
				Ok(lines) => lines,
				Err(e) => {
					warn!("Can't read {}: {}", file.display(), e);
					continue;
				}
			};

			for line in lines {
				if line.trim().is_empty() {
					continue;
				}
				match serde_json::from_str::<HashMap<String, String>>(&line) {
					Ok(entries) => table.units.extend(entries),
					Err(e) => warn!("Skipping malformed line in {}: {}", file.display(), e),
				}
			}
		}

		Ok(table)
	}

	/// Inserts a single mapping entry.
	pub fn insert(&mut self, unit: &str, romaji: &str) {
		self.units.insert(unit.to_owned(), romaji.to_owned());
	}

	/// Looks up the romaji value for a unit.
	pub fn get(&self, unit: &str) -> Option<&str> {
		self.units.get(unit).map(String::as_str)
	}

	/// Iterates over the (unit, romaji) pairs. No ordering guarantee.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.units.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.units.len()
	}

	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_from_dir_merges_files() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("a.txt"),
			"{\"あ\": \"a\"}\n\n{\"か\": \"ka\"}\n",
		)
		.unwrap();
		fs::write(dir.path().join("b.txt"), "{\"ん\": \"n\"}\n").unwrap();

		let table = UnitTable::from_dir(dir.path()).unwrap();
		assert_eq!(table.len(), 3);
		assert_eq!(table.get("あ"), Some("a"));
		assert_eq!(table.get("か"), Some("ka"));
		assert_eq!(table.get("ん"), Some("n"));
	}

	#[test]
	fn test_from_dir_is_idempotent() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("x.txt"), "{\"あ\": \"a\"}\n").unwrap();
		fs::write(dir.path().join("y.txt"), "{\"う\": \"u\"}\n{\"ん\": \"n\"}\n").unwrap();

		let first = UnitTable::from_dir(dir.path()).unwrap();
		let second = UnitTable::from_dir(dir.path()).unwrap();
		assert_eq!(first, second);
	}

	#[test]
	fn test_from_dir_skips_undecodable_file() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("good.txt"), "{\"あ\": \"a\"}\n").unwrap();
		// Invalid in both UTF-8 and Shift-JIS
		fs::write(dir.path().join("bad.txt"), b"\xff\xff\xff").unwrap();

		let table = UnitTable::from_dir(dir.path()).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.get("あ"), Some("a"));
	}

	#[test]
	fn test_from_dir_skips_malformed_line() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(
			dir.path().join("mixed.txt"),
			"not a mapping line\n{\"か\": \"ka\"}\n",
		)
		.unwrap();

		let table = UnitTable::from_dir(dir.path()).unwrap();
		assert_eq!(table.len(), 1);
		assert_eq!(table.get("か"), Some("ka"));
	}

	#[test]
	fn test_from_dir_reads_shift_jis_file() {
		let dir = tempfile::tempdir().unwrap();
		// {"か": "ka"} with か encoded as Shift-JIS (0x82 0xA9)
		fs::write(dir.path().join("sjis.txt"), b"{\"\x82\xa9\": \"ka\"}\n").unwrap();

		let table = UnitTable::from_dir(dir.path()).unwrap();
		assert_eq!(table.get("か"), Some("ka"));
	}

	#[test]
	fn test_from_dir_rejects_non_directory() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("file.txt");
		fs::write(&file, "").unwrap();

		assert!(UnitTable::from_dir(&file).is_err());
	}
}
