//! Submission validation.
//!
//! A submission is normalized and then run through three checks in a fixed
//! order: originality, possibility, reality. The first failing check decides
//! the rejection, so error messages are deterministic.

use crate::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use crate::session::Session;
use crate::{debug_log, info_log};

/// Per-deployment validation policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Candidates shorter than this many characters are ignored.
    pub min_length: usize,
    /// Language tag handed to the dictionary.
    pub language: String,
    /// When false, the dictionary is never consulted.
    pub reality_check: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            language: DEFAULT_LANGUAGE.to_string(),
            reality_check: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    DuplicateWord,
    ImpossibleWord,
    UnknownWord,
}

/// A user-facing rejection: what failed, plus the Turkish dialog text for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub title: String,
    pub message: String,
}

impl Rejection {
    #[must_use]
    pub fn new(kind: RejectionKind, root_word: &str) -> Self {
        let (title, message) = match kind {
            RejectionKind::DuplicateWord => (
                "Kelime zaten kullanılıyor".to_string(),
                "Daha önce bu kelimeyi kullandınız.".to_string(),
            ),
            RejectionKind::ImpossibleWord => (
                "Kelime mümkün değil".to_string(),
                format!("Bu kelimeyi heceleyemezsin -> '{root_word}'!"),
            ),
            RejectionKind::UnknownWord => (
                "Kelime tanınmadı".to_string(),
                "Lütfen geçerli bir kelime giriniz!".to_string(),
            ),
        };
        Self {
            kind,
            title,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(String),
    /// Input was below the minimum length; nothing to report.
    Empty,
    Rejected(Rejection),
}

impl ValidationOutcome {
    #[must_use]
    pub fn rejection_kind(&self) -> Option<RejectionKind> {
        match self {
            Self::Rejected(rejection) => Some(rejection.kind),
            Self::Accepted(_) | Self::Empty => None,
        }
    }
}

/// Lowercases and trims surrounding whitespace, newlines included.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[must_use]
pub fn is_original(session: &Session, candidate: &str) -> bool {
    !session.contains(candidate)
}

/// Whether `candidate` can be spelled from the letters of `root_word`, using
/// each letter at most as often as it appears there.
#[must_use]
pub fn is_possible(root_word: &str, candidate: &str) -> bool {
    let mut pool: Vec<char> = root_word.chars().collect();
    for letter in candidate.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(pos) => {
                pool.swap_remove(pos);
            }
            None => return false,
        }
    }
    true
}

/// Validates `raw_input` against the session and records it when accepted.
///
/// Rejections leave the session untouched. Accepted and empty submissions
/// clear the pending input.
pub fn submit<D>(
    session: &mut Session,
    raw_input: &str,
    dictionary: &D,
    config: &ValidatorConfig,
) -> ValidationOutcome
where
    D: Dictionary + ?Sized,
{
    let candidate = normalize(raw_input);
    debug_log!("submit() - raw: {:?}, candidate: {:?}", raw_input, candidate);

    if candidate.chars().count() < config.min_length.max(1) {
        session.clear_pending();
        return ValidationOutcome::Empty;
    }

    let kind = if !is_original(session, &candidate) {
        Some(RejectionKind::DuplicateWord)
    } else if !is_possible(session.root_word(), &candidate) {
        Some(RejectionKind::ImpossibleWord)
    } else if config.reality_check && !dictionary.is_real_word(&candidate, &config.language) {
        Some(RejectionKind::UnknownWord)
    } else {
        None
    };

    if let Some(kind) = kind {
        info_log!("submit() - rejected '{}': {:?}", candidate, kind);
        return ValidationOutcome::Rejected(Rejection::new(kind, session.root_word()));
    }

    info_log!("submit() - accepted '{}'", candidate);
    session.accept(candidate.clone());
    session.clear_pending();
    ValidationOutcome::Accepted(candidate)
}
