//! TUI application state and logic

use crate::controller::Controller;
use crate::game::GameStatus;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub controller: Controller<'a>,
    pub messages: Vec<Message>,
    pub show_share: bool,
    pub should_quit: bool,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(controller: Controller<'a>) -> Self {
        let config = *controller.config();
        let mut app = Self {
            controller,
            messages: Vec::new(),
            show_share: false,
            should_quit: false,
        };

        if app.controller.session().history().is_empty() {
            app.add_message(
                &format!(
                    "Guess the {}-letter word in {} attempts.",
                    config.word_length, config.max_attempts
                ),
                MessageStyle::Info,
            );
        } else {
            app.add_message("Resumed your saved game.", MessageStyle::Info);
            app.announce_result();
        }

        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.controller.is_locked() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('s') => self.show_share = !self.show_share,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) => {
                self.controller.add_key(c);
            }
            KeyCode::Backspace | KeyCode::Delete => {
                self.controller.delete_key();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.controller.submit() {
            Ok(outcome) if outcome.status.is_terminal() => self.announce_result(),
            Ok(_) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        match self.controller.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.show_share = false;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn announce_result(&mut self) {
        let session = self.controller.session();
        match session.status() {
            GameStatus::Won => {
                let label = session
                    .rank_label()
                    .map_or_else(|| "Solved".to_string(), |label| label.to_string());
                self.add_message(&format!("{label}!"), MessageStyle::Success);
            }
            GameStatus::Lost => {
                let target = session.target().text().to_uppercase();
                self.add_message(&target, MessageStyle::Error);
            }
            GameStatus::InProgress => return,
        }
        self.add_message(
            "Press 'n' for new game, 's' to share or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            if let Some(share) = app.controller.share_text() {
                println!("{share}");
            }
        }
        Err(err) => eprintln!("Error: {err}"),
    }

    Ok(())
}

fn run_app<'a, B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'a>,
) -> Result<App<'a>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
