// Library interface for rootword
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{AcceptAll, Dictionary, WordListDictionary};
pub use error::GameError;
pub use game_state::{GameController, GameInterface, UserAction, game_loop};
pub use session::Session;
pub use validator::{
    Rejection, RejectionKind, ValidationOutcome, ValidatorConfig, is_possible, normalize, submit,
};
pub use wordbank::{load_root_words_from_file, load_root_words_from_str};
