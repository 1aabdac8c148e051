use rootword::cli::{Cli, CliInterface, parse_cli};
use rootword::dictionary::{AcceptAll, Dictionary, WordListDictionary};
use rootword::logging::{LogTarget, default_log_path, init_logging};
use rootword::tui::TuiInterface;
use rootword::wordbank::{EMBEDDED_ROOT_WORDS, load_root_words_from_file, load_root_words_from_str};
use rootword::{GameController, GameError, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let log_target = match (cli.plain, default_log_path()) {
        (false, Some(path)) => LogTarget::File(path),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, &log_target);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), GameError> {
    let root_words = match &cli.root_words_path {
        Some(path) => load_root_words_from_file(path)?,
        None => load_root_words_from_str(EMBEDDED_ROOT_WORDS),
    };
    log::info!("Loaded {} root words", root_words.len());

    let config = cli.validator_config();
    let dictionary = load_dictionary(cli)?;
    let mut controller = GameController::new(root_words, dictionary, config)?;

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut controller, &mut interface)
    } else {
        let mut interface = TuiInterface::new()?;
        game_loop(&mut controller, &mut interface)
    }
}

fn load_dictionary(cli: &Cli) -> Result<Box<dyn Dictionary>, GameError> {
    if cli.no_reality_check {
        log::info!("Reality check disabled");
        return Ok(Box::new(AcceptAll));
    }

    let dictionary = match &cli.dictionary_path {
        Some(path) => {
            let mut dictionary = WordListDictionary::new();
            dictionary.add_words_from_file(&cli.language, path)?;
            dictionary
        }
        None => WordListDictionary::embedded(),
    };

    let count = dictionary.word_count(&cli.language);
    if count == 0 {
        log::warn!(
            "Dictionary has no words for language '{}'; every word will be rejected",
            cli.language
        );
    } else {
        log::info!("Dictionary loaded: {count} words for '{}'", cli.language);
    }
    Ok(Box::new(dictionary))
}
