//! TUI (Terminal User Interface) module for the root word game
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! - Title: the current root word
//! - Input field for the word being typed
//! - Found words, most recent first, each tagged with its letter count
//! - Status line and key help
//!
//! # State Machine
//! - `EnteringWord` → `ShowingError` (after a rejection) → back to `EnteringWord`
//!   once the dialog is dismissed with ENTER or ESC.

use crate::game_state::{GameInterface, RoundView, UserAction};
use crate::validator::Rejection;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_CHARS: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const DIALOG_WIDTH_PERCENT: u16 = 60;
const DIALOG_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
const WORD_STYLE: Style = Style::new()
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
    .add_modifier(Modifier::ITALIC);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    ShowingError { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    accepted_words: &'a [String],
    pending_input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and round display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    accepted_words: Vec<String>,
    pending_input: String,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        let terminal = setup_or_restore(enable_raw_mode, Self::enter_screen, || {
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
            let _ = disable_raw_mode();
        })?;
        info_log!("TuiInterface::new() - Terminal ready");

        Ok(Self {
            terminal,
            root_word: String::new(),
            accepted_words: Vec::new(),
            pending_input: String::new(),
            state: TuiState::EnteringWord,
            status: "Ready".to_string(),
        })
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            accepted_words: &self.accepted_words,
            pending_input: &self.pending_input,
            state: &self.state,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn sync_round(&mut self, round: &RoundView<'_>) {
        self.root_word = round.root_word.to_string();
        self.accepted_words = round.accepted_words.to_vec();
        self.pending_input = round.pending_input.to_string();
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Min(5),    // Found words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.pending_input, ctx.state);
        Self::render_words(f, chunks[2], ctx.accepted_words);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);

        if let TuiState::ShowingError { title, message } = ctx.state {
            Self::render_error_dialog(f, f.area(), title, message);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().title("Root word").borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, pending_input: &str, state: &TuiState) {
        let cursor = if matches!(state, TuiState::EnteringWord) {
            "_"
        } else {
            ""
        };
        let line = Line::from(vec![
            Span::raw(pending_input.to_string()),
            Span::styled(cursor, Style::default().fg(Color::Gray)),
        ]);
        let paragraph =
            Paragraph::new(line).block(Block::default().title("Enter a word").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_words(f: &mut Frame, area: Rect, accepted_words: &[String]) {
        let block = Block::default()
            .title(format!("Words ({})", accepted_words.len()))
            .borders(Borders::ALL);

        // Most recent first; anything past the bottom edge is cut off.
        let visible = block.inner(area).height as usize;
        let lines: Vec<Line> = accepted_words
            .iter()
            .take(visible)
            .map(|word| Self::word_line(word))
            .collect();

        let paragraph = Paragraph::new(lines).block(block);
        f.render_widget(paragraph, area);
    }

    fn word_line(word: &str) -> Line<'_> {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", word.chars().count()), BADGE_STYLE),
            Span::raw(" "),
            Span::styled(word, WORD_STYLE),
        ])
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(SUCCESS_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => "ENTER: Submit | CTRL-R: New root word | ESC: Quit",
            TuiState::ShowingError { .. } => "ENTER / ESC: OK",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_error_dialog(f: &mut Frame, area: Rect, title: &str, message: &str) {
        let dialog = centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT, area);
        let lines = vec![
            Line::from(""),
            Line::from(Span::raw(message)),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", HEADER_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(Span::styled(title, ERROR_STYLE))
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(Clear, dialog);
        f.render_widget(paragraph, dialog);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(match self.state {
                    TuiState::EnteringWord => self.handle_word_input(key),
                    TuiState::ShowingError { .. } => {
                        self.handle_dialog_input(key);
                        None
                    }
                })
            }
            Event::Paste(text) if matches!(self.state, TuiState::EnteringWord) => {
                Ok(typed_action(&self.pending_input, &text))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('r' | 'R') if ctrl => {
                info_log!("handle_word_input() - CTRL-R pressed, returning Restart");
                Some(UserAction::Restart)
            }
            KeyCode::Char('c') if ctrl => Some(UserAction::Exit),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                typed_action(&self.pending_input, c.encode_utf8(&mut [0; 4]))
            }
            KeyCode::Backspace => Some(UserAction::Erase),
            KeyCode::Enter => {
                info_log!("handle_word_input() - Submitting '{}'", self.pending_input);
                Some(UserAction::SubmitPending)
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            _ => None,
        }
    }

    fn handle_dialog_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.state = TuiState::EnteringWord;
            self.status = "Try another word".to_string();
        }
    }
}

/// Runs `enable`, then `setup`. If `setup` fails, `restore` undoes `enable`
/// before the error is returned, so a failed start never leaves the terminal
/// in raw mode.
fn setup_or_restore<T>(
    enable: impl FnOnce() -> io::Result<()>,
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    enable()?;
    setup().inspect_err(|e| {
        log::warn!("Terminal setup failed, restoring terminal: {e}");
        restore();
    })
}

/// Turns typed or pasted text into a `Type` action, dropping control
/// characters and anything past the input limit.
fn typed_action(pending_input: &str, text: &str) -> Option<UserAction> {
    // Control characters show up from terminal escape sequences on focus changes.
    let room = MAX_INPUT_CHARS.saturating_sub(pending_input.chars().count());
    let accepted: String = text
        .chars()
        .filter(|&c| !c.is_control() && c != '\u{FFFD}')
        .take(room)
        .collect();
    if accepted.is_empty() {
        None
    } else {
        Some(UserAction::Type(accepted))
    }
}

/// A rectangle `percent_x` wide and `height` tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, round: &RoundView<'_>) {
        self.sync_round(round);
        self.state = TuiState::EnteringWord;
        self.status = format!(
            "Find words made from the letters of '{}'",
            round.root_word
        );
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_input(&mut self, pending_input: &str) {
        self.pending_input = pending_input.to_string();
        self.draw_or_log();
    }

    fn display_accepted(&mut self, word: &str, round: &RoundView<'_>) {
        self.sync_round(round);
        self.status = format!("Accepted '{word}' - {} words found", round.accepted_words.len());
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: &Rejection) {
        self.state = TuiState::ShowingError {
            title: rejection.title.clone(),
            message: rejection.message.clone(),
        };
        self.status = rejection.title.clone();
        self.draw_or_log();
    }

    fn display_new_round(&mut self, round: &RoundView<'_>) {
        self.sync_round(round);
        self.state = TuiState::EnteringWord;
        self.status = format!("New root word: {}", round.root_word);
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
