use std::path::{Path, PathBuf};
use std::{env, fs, io};

use encoding_rs::SHIFT_JIS;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Decodes as UTF-8 first
/// - Falls back to Shift-JIS on UTF-8 decode failure (legacy mapping files)
///
/// # Errors
/// Returns `InvalidData` if the file is valid in neither encoding.
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let bytes = fs::read(filename)?;

	let contents = match String::from_utf8(bytes) {
		Ok(s) => s,
		Err(err) => {
			let (decoded, _, had_errors) = SHIFT_JIS.decode(err.as_bytes());
			if had_errors {
				return Err(io::Error::new(
					io::ErrorKind::InvalidData,
					"file is neither valid UTF-8 nor valid Shift-JIS",
				));
			}
			decoded.into_owned()
		}
	};

	Ok(contents.lines().map(str::to_owned).collect())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub fn normalize_folder(input: &str) -> PathBuf {
	if input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Lists all files with a given extension in a directory.
///
/// Returns full paths, sorted by name so that callers observe the same
/// order regardless of platform directory iteration order.
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<PathBuf>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			files.push(path);
		}
	}

	files.sort();

	Ok(files)
}

/// Returns the first free output path for a given stem.
///
/// Examples (with `stem = "word_output"`):
/// - `word_output.txt` if it does not exist yet
/// - otherwise `word_output_1.txt`, `word_output_2.txt`, …
pub fn next_available_path<P: AsRef<Path>>(dir: P, stem: &str) -> PathBuf {
	let dir = dir.as_ref();

	let mut counter: usize = 0;
	loop {
		let filename = if counter == 0 {
			format!("{}.txt", stem)
		} else {
			format!("{}_{}.txt", stem, counter)
		};
		let candidate = dir.join(filename);
		if !candidate.exists() {
			return candidate;
		}
		counter += 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_read_lines_utf8() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("a.txt");
		fs::write(&path, "{\"あ\": \"a\"}\n\n{\"ん\": \"n\"}").unwrap();

		let lines = read_lines(&path).unwrap();
		assert_eq!(lines, vec!["{\"あ\": \"a\"}", "", "{\"ん\": \"n\"}"]);
	}

	#[test]
	fn test_read_lines_shift_jis_fallback() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sjis.txt");
		// "か" in Shift-JIS is 0x82 0xA9, which is not valid UTF-8
		fs::write(&path, b"{\"\x82\xa9\": \"ka\"}").unwrap();

		let lines = read_lines(&path).unwrap();
		assert_eq!(lines, vec!["{\"か\": \"ka\"}"]);
	}

	#[test]
	fn test_read_lines_undecodable() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("bad.txt");
		// 0xFF is invalid as a lead byte in both UTF-8 and Shift-JIS
		fs::write(&path, b"\xff\xff\xff").unwrap();

		assert!(read_lines(&path).is_err());
	}

	#[test]
	fn test_list_files_filters_and_sorts() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("b.txt"), "").unwrap();
		fs::write(dir.path().join("a.txt"), "").unwrap();
		fs::write(dir.path().join("c.dat"), "").unwrap();

		let files = list_files(dir.path(), "txt").unwrap();
		let names: Vec<_> = files
			.iter()
			.map(|p| p.file_name().unwrap().to_string_lossy().to_string())
			.collect();
		assert_eq!(names, vec!["a.txt", "b.txt"]);
	}

	#[test]
	fn test_next_available_path_increments() {
		let dir = tempfile::tempdir().unwrap();

		let first = next_available_path(dir.path(), "word_output");
		assert_eq!(first, dir.path().join("word_output.txt"));

		fs::write(&first, "").unwrap();
		let second = next_available_path(dir.path(), "word_output");
		assert_eq!(second, dir.path().join("word_output_1.txt"));

		fs::write(&second, "").unwrap();
		let third = next_available_path(dir.path(), "word_output");
		assert_eq!(third, dir.path().join("word_output_2.txt"));
	}
}
