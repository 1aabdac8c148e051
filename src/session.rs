//! Per-round game state: the root word, the words accepted so far and the
//! text the player is currently composing.

use crate::debug_log;
use crate::error::GameError;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    root_word: String,
    accepted_words: Vec<String>,
    pending_input: String,
}

impl Session {
    /// Creates a session and starts its first round.
    pub fn new<R: Rng + ?Sized>(candidates: &[String], rng: &mut R) -> Result<Self, GameError> {
        let mut session = Self::default();
        session.start_round(candidates, rng)?;
        Ok(session)
    }

    /// Picks a new root word uniformly at random and clears the accepted words.
    ///
    /// Blank candidates are skipped. The session is left untouched when no
    /// usable candidate exists.
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        candidates: &[String],
        rng: &mut R,
    ) -> Result<(), GameError> {
        let usable: Vec<&String> = candidates
            .iter()
            .filter(|word| !word.trim().is_empty())
            .collect();
        let picked = usable.choose(rng).ok_or(GameError::EmptyCandidateList)?;

        self.root_word = picked.trim().to_lowercase();
        self.accepted_words.clear();
        self.pending_input.clear();
        debug_log!(
            "start_round() - picked '{}' from {} candidates",
            self.root_word,
            usable.len()
        );
        Ok(())
    }

    /// Clears the accepted words, keeping the current root word.
    pub fn reset(&mut self) {
        self.accepted_words.clear();
    }

    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        candidates: &[String],
        rng: &mut R,
    ) -> Result<(), GameError> {
        self.reset();
        self.start_round(candidates, rng)
    }

    /// Records an already validated word as the most recent entry.
    pub fn accept(&mut self, word: String) {
        self.accepted_words.insert(0, word);
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first.
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.accepted_words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    pub fn push_pending(&mut self, text: &str) {
        self.pending_input.push_str(text);
    }

    pub fn pop_pending(&mut self) -> Option<char> {
        self.pending_input.pop()
    }

    pub fn clear_pending(&mut self) {
        self.pending_input.clear();
    }
}
