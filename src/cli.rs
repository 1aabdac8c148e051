use crate::dictionary::DEFAULT_LANGUAGE;
use crate::game_state::{GameInterface, RoundView, UserAction};
use crate::validator::{Rejection, ValidatorConfig};
use clap::Parser;
use std::io::BufRead;

/// Root word game: spell as many words as you can from one root word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited root word list
    #[arg(short = 'i', long = "input")]
    pub root_words_path: Option<String>,

    /// Path to a newline-delimited dictionary used for the reality check
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Language tag passed to the dictionary
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Shortest word length (in characters) that is considered a submission
    #[arg(long = "min-length", default_value_t = 1)]
    pub min_length: usize,

    /// Accept any spellable word without consulting the dictionary
    #[arg(long = "no-reality-check")]
    pub no_reality_check: bool,

    /// Use the line-oriented interface instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            min_length: self.min_length,
            language: self.language.clone(),
            reality_check: !self.no_reality_check,
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const RESTART_COMMAND: &str = ":restart";
const QUIT_COMMAND: &str = ":quit";

pub enum LineInput {
    Word(String),
    Restart,
    Exit,
}

/// Reads one line. End of input counts as exit.
pub fn read_line_input<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nEnter a word ('{RESTART_COMMAND}' for a new root word, '{QUIT_COMMAND}' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => LineInput::Exit,
        Ok(_) if input.trim() == RESTART_COMMAND => LineInput::Restart,
        Ok(_) if input.trim() == QUIT_COMMAND => LineInput::Exit,
        Ok(_) => LineInput::Word(input),
    }
}

pub fn display_round(round: &RoundView<'_>) {
    println!("Root word: {}", round.root_word.to_uppercase());
    display_words(round.accepted_words);
}

pub fn display_words(words: &[String]) {
    if words.is_empty() {
        println!("No words found yet.");
        return;
    }
    println!("Words ({}):", words.len());
    for word in words {
        println!("  ({}) {word}", word.chars().count());
    }
}

pub fn display_rejection(rejection: &Rejection) {
    println!("{}: {}", rejection.title, rejection.message);
}

/// Line-oriented implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, round: &RoundView<'_>) {
        display_round(round);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        Some(match read_line_input(&mut self.reader) {
            LineInput::Word(text) => UserAction::Submit(text),
            LineInput::Restart => UserAction::Restart,
            LineInput::Exit => UserAction::Exit,
        })
    }

    // The terminal echoes typed lines itself.
    fn display_input(&mut self, _pending_input: &str) {}

    fn display_accepted(&mut self, word: &str, round: &RoundView<'_>) {
        println!("Accepted: {word}");
        display_words(round.accepted_words);
    }

    fn display_rejection(&mut self, rejection: &Rejection) {
        display_rejection(rejection);
    }

    fn display_new_round(&mut self, round: &RoundView<'_>) {
        println!("New round started.");
        display_round(round);
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_defaults() {
        let cli = Cli::try_parse_from(["rootword"]).unwrap();
        assert_eq!(cli.root_words_path, None);
        assert_eq!(cli.dictionary_path, None);
        assert_eq!(cli.language, "tr");
        assert_eq!(cli.min_length, 1);
        assert!(!cli.no_reality_check);
        assert!(!cli.plain);
        assert_eq!(cli.validator_config(), ValidatorConfig::default());
    }

    #[test]
    fn test_parse_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "rootword",
            "-i",
            "start.txt",
            "--dictionary",
            "words.txt",
            "-l",
            "en",
            "--min-length",
            "2",
            "--no-reality-check",
            "--plain",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.root_words_path.as_deref(), Some("start.txt"));
        assert_eq!(cli.dictionary_path.as_deref(), Some("words.txt"));
        assert!(cli.plain);
        assert!(cli.verbose);

        let config = cli.validator_config();
        assert_eq!(config.language, "en");
        assert_eq!(config.min_length, 2);
        assert!(!config.reality_check);
    }

    #[test]
    fn test_parse_cli_rejects_bad_min_length() {
        assert!(Cli::try_parse_from(["rootword", "--min-length", "two"]).is_err());
    }

    #[test]
    fn test_read_line_input_word_keeps_raw_text() {
        let mut reader = Cursor::new("  Kale \n");
        match read_line_input(&mut reader) {
            LineInput::Word(text) => assert_eq!(text, "  Kale \n"),
            _ => panic!("Expected Word"),
        }
    }

    #[test]
    fn test_read_line_input_commands() {
        let mut reader = Cursor::new(":restart\n  :quit  \n");
        assert!(matches!(read_line_input(&mut reader), LineInput::Restart));
        assert!(matches!(read_line_input(&mut reader), LineInput::Exit));
    }

    #[test]
    fn test_read_line_input_eof_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_line_input(&mut reader), LineInput::Exit));
    }

    #[test]
    fn test_read_line_input_blank_line_is_word() {
        let mut reader = Cursor::new("\n");
        assert!(matches!(read_line_input(&mut reader), LineInput::Word(_)));
    }

    #[test]
    fn test_cli_interface_actions() {
        let mut interface = CliInterface::new(Cursor::new("ela\n:restart\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Submit("ela\n".to_string()))
        );
        assert_eq!(interface.read_action(), Some(UserAction::Restart));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
