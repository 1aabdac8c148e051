use crate::error::GameError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_ROOT_WORDS: &str = include_str!("resources/start.txt");

/// Parses a newline-delimited root word list. Lines are trimmed and blank
/// lines dropped; case is kept, the session lowercases on selection.
pub fn load_root_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_root_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, GameError> {
    let path = path.as_ref();
    let io_error = |source| GameError::Io {
        path: path.to_path_buf(),
        source,
    };
    let reader = BufReader::new(File::open(path).map_err(io_error)?);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(io_error)?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_str_trims_and_drops_blanks() {
        let words = load_root_words_from_str("Kalem\n\n  defter \r\n\nsilgi");
        assert_eq!(words, ["Kalem", "defter", "silgi"]);
    }

    #[test]
    fn test_load_from_str_empty() {
        assert!(load_root_words_from_str("").is_empty());
        assert!(load_root_words_from_str("\n\n   \n").is_empty());
    }

    #[test]
    fn test_embedded_root_words() {
        let words = load_root_words_from_str(EMBEDDED_ROOT_WORDS);
        assert!(!words.is_empty());
        assert!(words.iter().any(|w| w == "kalem"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ELEKTRIK").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "kelebek").unwrap();

        let words = load_root_words_from_file(file.path()).unwrap();
        assert_eq!(words, ["ELEKTRIK", "kelebek"]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_root_words_from_file("/nonexistent/rootword/start.txt");
        match result {
            Err(GameError::Io { path, .. }) => {
                assert!(path.ends_with("start.txt"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
