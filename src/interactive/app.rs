//! TUI application state and logic
//!
//! The app feeds key events to the controller. Enter does not commit right
//! away: the guess is checked, then committed by a later `tick` once the
//! reveal delay has passed.

use crate::commands::session_share_text;
use crate::config::Config;
use crate::core::Word;
use crate::game::{Controller, GameState, GuessOutcome, Key};
use crate::persistence::Store;
use crate::share::copy_to_clipboard;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Pause between Enter and the tiles being scored
pub const REVEAL_DELAY: Duration = Duration::from_millis(600);

/// How long to wait for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(250);

const MAX_MESSAGES: usize = 5;

/// A checked guess waiting for its reveal
///
/// Tagged with the target and row it was checked against; a tag that no
/// longer matches the session means the board moved on and the reveal is
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReveal {
    pub due: Instant,
    pub target: Word,
    pub row: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S: Store> {
    pub controller: Controller<S>,
    pub config: Config,
    pub messages: Vec<Message>,
    pub pending: Option<PendingReveal>,
    /// Share text shown on screen when it could not be copied
    pub shared: Option<String>,
    pub show_stats: bool,
    pub should_quit: bool,
}

impl<S: Store> App<S> {
    #[must_use]
    pub fn new(controller: Controller<S>, config: Config) -> Self {
        let mut app = Self {
            show_stats: controller.session().state().is_over(),
            controller,
            config,
            messages: Vec::new(),
            pending: None,
            shared: None,
            should_quit: false,
        };

        let day = app.controller.session().day();
        app.add_message(
            &format!("Welcome to {} #{day}!", app.config.game_name),
            MessageStyle::Info,
        );
        if app.controller.session().state().is_over() {
            app.add_message(
                "Today's puzzle is done. Ctrl-S to share, Ctrl-R to play again.",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Type a five-letter word and press Enter.", MessageStyle::Info);
        }
        app
    }

    /// Apply one game key
    ///
    /// Input is ignored while a reveal is pending. Enter checks the typed row
    /// and schedules the reveal, or reports why it was rejected.
    pub fn press(&mut self, key: Key, now: Instant) {
        if self.pending.is_some() {
            return;
        }

        match key {
            Key::Enter => match self.controller.check_current_guess() {
                Ok(_) => {
                    let session = self.controller.session();
                    self.pending = Some(PendingReveal {
                        due: now + REVEAL_DELAY,
                        target: session.target().clone(),
                        row: session.current_row(),
                    });
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            },
            Key::Letter(ch) => {
                self.controller.type_letter(ch);
            }
            Key::Backspace => {
                self.controller.delete_letter();
            }
        }
    }

    /// Commit a pending reveal whose time has come
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending.take_if(|p| p.due <= now) else {
            return;
        };

        let session = self.controller.session();
        if pending.target != *session.target() || pending.row != session.current_row() {
            tracing::debug!(row = pending.row, "Dropping stale reveal");
            return;
        }

        match self.controller.submit() {
            Ok(outcome) => self.announce(&outcome),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn announce(&mut self, outcome: &GuessOutcome) {
        match outcome.state {
            GameState::Won => {
                let celebration = match outcome.row + 1 {
                    1 => "🎯 Genius!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-S to share your result.", MessageStyle::Info);
                self.show_stats = true;
            }
            GameState::Lost => {
                let target = self.controller.session().target().text().to_string();
                self.add_message(&format!("The word was {target}"), MessageStyle::Error);
                self.add_message("Ctrl-S to share, Ctrl-R to try again.", MessageStyle::Info);
                self.show_stats = true;
            }
            GameState::Playing => {}
        }
    }

    /// Start the configured puzzle over, cancelling any pending reveal
    pub fn reset(&mut self) {
        self.pending = None;
        self.shared = None;
        self.show_stats = false;
        self.controller.reset(self.config.puzzle_day());
        self.add_message(
            &format!("Started puzzle #{}", self.controller.session().day()),
            MessageStyle::Info,
        );
    }

    /// Copy the share text, or show it when there is no clipboard
    pub fn share(&mut self) {
        let Some(text) = session_share_text(self.controller.session(), &self.config.game_name)
        else {
            self.add_message("Finish the puzzle first!", MessageStyle::Error);
            return;
        };

        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.shared = None;
                self.add_message("Copied results to clipboard", MessageStyle::Success);
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Info);
                self.shared = Some(text);
                self.show_stats = true;
            }
        }
    }

    /// How long the event loop may block before the next tick is due
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.pending
            .as_ref()
            .map_or(IDLE_POLL, |p| p.due.saturating_duration_since(now))
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('r') if ctrl => app.reset(),
                KeyCode::Char('s') if ctrl => app.share(),
                KeyCode::Tab => app.show_stats = !app.show_stats,
                KeyCode::Char(c) if !ctrl => {
                    if let Some(k) = Key::from_char(c) {
                        app.press(k, Instant::now());
                    }
                }
                KeyCode::Enter => app.press(Key::Enter, Instant::now()),
                KeyCode::Backspace => app.press(Key::Backspace, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
