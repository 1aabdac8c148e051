//! Dictionary lookups used by the reality check.

use crate::error::GameError;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary_tr.txt");
pub const DEFAULT_LANGUAGE: &str = "tr";

/// Answers whether a word is a real word in the given language.
pub trait Dictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Accepts every word. Used when the reality check has nothing to look up.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl Dictionary for AcceptAll {
    fn is_real_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// In-memory word sets keyed by language tag.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    languages: HashMap<String, HashSet<String>>,
}

impl WordListDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds newline-delimited words for `language`. Lines are trimmed and
    /// lowercased; blank lines and `#` comments are skipped.
    pub fn add_words_from_str(&mut self, language: &str, data: &str) -> usize {
        let set = self.languages.entry(language.to_string()).or_default();
        let before = set.len();
        set.extend(
            data.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        );
        set.len() - before
    }

    pub fn add_words_from_file<P: AsRef<Path>>(
        &mut self,
        language: &str,
        path: P,
    ) -> Result<usize, GameError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.add_words_from_str(language, &data))
    }

    #[must_use]
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        let set = dictionary.languages.entry(language.to_string()).or_default();
        set.extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        dictionary
    }

    /// The bundled Turkish word list.
    #[must_use]
    pub fn embedded() -> Self {
        let mut dictionary = Self::new();
        dictionary.add_words_from_str(DEFAULT_LANGUAGE, EMBEDDED_DICTIONARY);
        dictionary
    }

    #[must_use]
    pub fn word_count(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, HashSet::len)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.languages
            .get(language)
            .is_some_and(|set| set.contains(word))
    }
}
