use crate::dictionary::Dictionary;
use crate::error::GameError;
use crate::session::Session;
use crate::validator::{Rejection, ValidationOutcome, ValidatorConfig, submit};
use crate::{debug_log, info_log};
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// What the player asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Submit this text as a whole line.
    Submit(String),
    /// Append text to the pending input.
    Type(String),
    /// Delete the last character of the pending input.
    Erase,
    /// Submit whatever is pending.
    SubmitPending,
    Restart,
    Exit,
}

/// Snapshot of the round handed to the front end after every change.
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub root_word: &'a str,
    pub accepted_words: &'a [String],
    /// Text left in the input field; kept after a rejection so it can be edited.
    pub pending_input: &'a str,
}

/// Front-end contract. The game loop owns the session and calls these to
/// show state and collect input.
pub trait GameInterface {
    fn display_round(&mut self, round: &RoundView<'_>);
    /// `None` means the input produced no action; the loop asks again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_input(&mut self, pending_input: &str);
    fn display_accepted(&mut self, word: &str, round: &RoundView<'_>);
    fn display_rejection(&mut self, rejection: &Rejection);
    fn display_new_round(&mut self, round: &RoundView<'_>);
    fn display_exit_message(&mut self);
}

/// Owns the session and everything needed to validate and restart it.
pub struct GameController {
    session: Session,
    candidates: Vec<String>,
    dictionary: Box<dyn Dictionary>,
    config: ValidatorConfig,
    rng: Box<dyn RngCore>,
}

impl GameController {
    /// Starts the first round. Fails when `candidates` has no usable word.
    pub fn new(
        candidates: Vec<String>,
        dictionary: Box<dyn Dictionary>,
        config: ValidatorConfig,
    ) -> Result<Self, GameError> {
        Self::with_rng(candidates, dictionary, config, Box::new(StdRng::from_entropy()))
    }

    pub fn with_rng(
        candidates: Vec<String>,
        dictionary: Box<dyn Dictionary>,
        config: ValidatorConfig,
        mut rng: Box<dyn RngCore>,
    ) -> Result<Self, GameError> {
        let session = Session::new(&candidates, &mut rng)?;
        info_log!(
            "GameController - first root word '{}' ({} candidates, {:?})",
            session.root_word(),
            candidates.len(),
            config
        );
        Ok(Self {
            session,
            candidates,
            dictionary,
            config,
            rng,
        })
    }

    pub fn submit(&mut self, raw_input: &str) -> ValidationOutcome {
        submit(&mut self.session, raw_input, self.dictionary.as_ref(), &self.config)
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        self.session.restart(&self.candidates, &mut self.rng)?;
        info_log!("GameController - new root word '{}'", self.session.root_word());
        Ok(())
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    #[must_use]
    pub fn round(&self) -> RoundView<'_> {
        RoundView {
            root_word: self.session.root_word(),
            accepted_words: self.session.accepted_words(),
            pending_input: self.session.pending_input(),
        }
    }
}

/// Runs rounds until the player exits.
pub fn game_loop<I: GameInterface>(
    controller: &mut GameController,
    interface: &mut I,
) -> Result<(), GameError> {
    interface.display_round(&controller.round());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                return Ok(());
            }
            UserAction::Restart => {
                controller.restart()?;
                interface.display_new_round(&controller.round());
            }
            UserAction::Type(text) => {
                controller.session_mut().push_pending(&text);
                interface.display_input(controller.session().pending_input());
            }
            UserAction::Erase => {
                controller.session_mut().pop_pending();
                interface.display_input(controller.session().pending_input());
            }
            UserAction::SubmitPending => {
                let text = controller.session().pending_input().to_string();
                handle_submission(controller, interface, &text);
            }
            UserAction::Submit(text) => {
                controller
                    .session_mut()
                    .set_pending_input(text.trim_end_matches(['\r', '\n']));
                handle_submission(controller, interface, &text);
            }
        }
    }
}

fn handle_submission<I: GameInterface>(
    controller: &mut GameController,
    interface: &mut I,
    text: &str,
) {
    match controller.submit(text) {
        ValidationOutcome::Accepted(word) => {
            interface.display_accepted(&word, &controller.round());
        }
        ValidationOutcome::Rejected(rejection) => {
            interface.display_rejection(&rejection);
        }
        ValidationOutcome::Empty => {
            interface.display_round(&controller.round());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AcceptAll, WordListDictionary};
    use crate::validator::RejectionKind;
    use std::collections::VecDeque;

    /// Replays scripted actions and records what the loop showed.
    #[derive(Default)]
    struct ScriptedInterface {
        actions: VecDeque<Option<UserAction>>,
        rounds: Vec<String>,
        accepted: Vec<Vec<String>>,
        rejections: Vec<RejectionKind>,
        inputs: Vec<String>,
        exited: bool,
    }

    impl ScriptedInterface {
        fn new(actions: Vec<Option<UserAction>>) -> Self {
            Self {
                actions: actions.into(),
                ..Self::default()
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_round(&mut self, round: &RoundView<'_>) {
            self.rounds.push(round.root_word.to_string());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            self.actions.pop_front().unwrap_or(Some(UserAction::Exit))
        }

        fn display_input(&mut self, pending_input: &str) {
            self.inputs.push(pending_input.to_string());
        }

        fn display_accepted(&mut self, _word: &str, round: &RoundView<'_>) {
            self.accepted.push(round.accepted_words.to_vec());
        }

        fn display_rejection(&mut self, rejection: &Rejection) {
            self.rejections.push(rejection.kind);
        }

        fn display_new_round(&mut self, round: &RoundView<'_>) {
            self.rounds.push(round.root_word.to_string());
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    fn controller(candidates: &[&str]) -> GameController {
        let dictionary = WordListDictionary::from_words("tr", ["ela", "kale", "elma"]);
        GameController::with_rng(
            candidates.iter().map(|s| (*s).to_string()).collect(),
            Box::new(dictionary),
            ValidatorConfig::default(),
            Box::new(StdRng::seed_from_u64(9)),
        )
        .unwrap()
    }

    #[test]
    fn test_controller_empty_candidates() {
        let result = GameController::new(Vec::new(), Box::new(AcceptAll), ValidatorConfig::default());
        assert!(matches!(result, Err(GameError::EmptyCandidateList)));
    }

    #[test]
    fn test_game_loop_immediate_exit() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![Some(UserAction::Exit)]);
        game_loop(&mut controller, &mut interface).unwrap();
        assert_eq!(interface.rounds, ["kalem"]);
        assert!(interface.exited);
    }

    #[test]
    fn test_game_loop_routes_outcomes() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("ela".to_string())),
            None,
            Some(UserAction::Submit("ELA ".to_string())),
            Some(UserAction::Submit("kalp".to_string())),
            Some(UserAction::Submit("mek".to_string())),
            Some(UserAction::Submit("   ".to_string())),
            Some(UserAction::Submit("kale".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();

        assert_eq!(
            interface.rejections,
            [
                RejectionKind::DuplicateWord,
                RejectionKind::ImpossibleWord,
                RejectionKind::UnknownWord
            ]
        );
        assert_eq!(interface.accepted, [vec!["ela"], vec!["kale", "ela"]]);
        assert_eq!(controller.session().accepted_words(), ["kale", "ela"]);
        assert!(controller.session().pending_input().is_empty());
    }

    #[test]
    fn test_game_loop_keeps_rejected_input_pending() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("kalp\n".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();
        assert_eq!(interface.rejections, [RejectionKind::ImpossibleWord]);
        assert_eq!(controller.session().pending_input(), "kalp");
    }

    #[test]
    fn test_game_loop_empty_submission_redisplays_round() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("  \n".to_string())),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();
        assert_eq!(interface.rounds, ["kalem", "kalem"]);
        assert!(interface.rejections.is_empty());
        assert!(controller.session().pending_input().is_empty());
    }

    #[test]
    fn test_game_loop_keystrokes_edit_pending_input() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Type("E".to_string())),
            Some(UserAction::Type("lx".to_string())),
            Some(UserAction::Erase),
            Some(UserAction::Type("a".to_string())),
            Some(UserAction::SubmitPending),
            Some(UserAction::Type("kalp".to_string())),
            Some(UserAction::SubmitPending),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();

        assert_eq!(interface.inputs, ["E", "Elx", "El", "Ela", "kalp"]);
        assert_eq!(controller.session().accepted_words(), ["ela"]);
        assert_eq!(interface.rejections, [RejectionKind::ImpossibleWord]);
        // Rejected text stays pending so it can be corrected.
        assert_eq!(controller.session().pending_input(), "kalp");
    }

    #[test]
    fn test_game_loop_erase_on_empty_input() {
        let mut controller = controller(&["kalem"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Erase),
            Some(UserAction::SubmitPending),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();

        assert_eq!(interface.inputs, [""]);
        assert_eq!(interface.rounds, ["kalem", "kalem"]);
        assert!(controller.session().accepted_words().is_empty());
    }

    #[test]
    fn test_game_loop_restart_clears_words() {
        let mut controller = controller(&["kalem", "elma"]);
        let mut interface = ScriptedInterface::new(vec![
            Some(UserAction::Submit("ela".to_string())),
            Some(UserAction::Restart),
            Some(UserAction::Exit),
        ]);
        game_loop(&mut controller, &mut interface).unwrap();

        assert_eq!(interface.rounds.len(), 2);
        assert!(controller.session().accepted_words().is_empty());
        assert!(["kalem", "elma"].contains(&controller.session().root_word()));
    }

    #[test]
    fn test_controller_round_view() {
        let mut controller = controller(&["kalem"]);
        controller.submit("elma");
        let round = controller.round();
        assert_eq!(round.root_word, "kalem");
        assert_eq!(round.accepted_words, ["elma"]);
    }
}
