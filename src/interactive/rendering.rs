//! TUI rendering with ratatui
//!
//! Board, keyboard and end-of-game panels for the game interface.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::game::{GameStatus, KEYBOARD_ROWS, LetterHints, format_win_percentage};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Messages and results
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Tile colors for a verdict; `None` is a tile not yet scored
fn tile_style(verdict: Option<Verdict>) -> Style {
    let style = Style::default().add_modifier(Modifier::BOLD);
    match verdict {
        Some(Verdict::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(Verdict::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(Verdict::Wrong) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn tile(letter: char, verdict: Option<Verdict>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.to_ascii_uppercase()),
        tile_style(verdict),
    )
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = app.controller.session();
    let length = session.word_length();
    let mut lines = Vec::with_capacity(session.max_attempts() * 2);

    for attempt in session.history() {
        let spans: Vec<Span> = attempt
            .word()
            .text()
            .chars()
            .zip(attempt.result().iter())
            .flat_map(|(letter, verdict)| [tile(letter, Some(verdict)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let mut rows_left = session.attempts_remaining();
    if session.status() == GameStatus::InProgress && rows_left > 0 {
        let typed: Vec<char> = app.controller.input().chars().collect();
        let spans: Vec<Span> = (0..length)
            .flat_map(|i| {
                let cell = typed.get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::Gray)),
                    |&c| tile(c, None),
                );
                [cell, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
        rows_left -= 1;
    }

    for _ in 0..rows_left {
        let spans: Vec<Span> = (0..length)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn keyboard_lines(hints: &LetterHints) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| [tile(c, hints.get(c as u8)), Span::raw(" ")])
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect()
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area);

    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(&app.controller.hints())).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Messages
            Constraint::Percentage(65), // Results
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_results(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let controller = &app.controller;
    let stats = controller.stats();

    let mut content = Vec::new();
    if controller.is_locked() {
        content.push(Line::from(vec![
            Span::raw("Word:       "),
            Span::styled(
                controller.session().target().text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        content.push(Line::from(format!("Definition: {}", controller.definition())));
        content.push(Line::from(""));
    }

    content.push(Line::from(format!("Played:         {}", stats.games_played)));
    content.push(Line::from(format!(
        "Win %:          {}",
        format_win_percentage(stats.win_percentage())
    )));
    content.push(Line::from(format!("Current Streak: {}", stats.current_streak)));
    content.push(Line::from(format!("Max Streak:     {}", stats.max_streak)));

    if app.show_share
        && let Some(share) = controller.share_text()
    {
        content.push(Line::from(""));
        content.extend(share.lines().map(|line| Line::from(line.to_string())));
    }

    let title = if controller.is_locked() {
        " Results "
    } else {
        " Statistics "
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let session = app.controller.session();
    let attempts_text = format!(
        "Attempt: {}/{}",
        (session.history().len() + 1).min(session.max_attempts()),
        session.max_attempts()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let help_text = if app.controller.is_locked() {
        "q: Quit | n: New Game | s: Share"
    } else {
        "Type letters | Enter: Submit | Backspace: Delete | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::controller::Controller;
    use crate::game::GameConfig;
    use crate::services::{MemoryStore, NoDefinitions};
    use crate::wordlists::Dictionary;
    use crate::wordlists::loader::words_from_slice;
    use ratatui::{Terminal, backend::TestBackend};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn board_shows_history_input_and_empty_rows() {
        let dictionary = Dictionary::from_words(words_from_slice(&["crane", "slate"]));
        let mut controller = Controller::new(
            GameConfig::new(5, 3).unwrap(),
            &dictionary,
            &NoDefinitions,
            Box::new(MemoryStore::default()),
        )
        .unwrap();
        controller
            .new_game_with_target(Word::new("crane").unwrap())
            .unwrap();
        controller.submit_word("slate").unwrap();
        controller.add_key('c');
        controller.add_key('r');
        let app = App::new(controller);

        let lines = board_lines(&app);
        // Three rows, each followed by a spacer
        assert_eq!(lines.len(), 6);
        assert_eq!(line_text(&lines[0]), " S   L   A   T   E  ");
        assert!(line_text(&lines[2]).starts_with(" C   R   _ "));
        assert_eq!(line_text(&lines[4]).matches('·').count(), 5);
    }

    #[test]
    fn keyboard_tints_guessed_letters() {
        assert_eq!(tile_style(Some(Verdict::Correct)).bg, Some(Color::Green));
        assert_eq!(tile_style(None).bg, None);
        assert_eq!(keyboard_lines(&LetterHints::default()).len(), 3);
    }

    #[test]
    fn full_frame_renders() {
        let dictionary = Dictionary::from_words(words_from_slice(&["crane"]));
        let controller = Controller::new(
            GameConfig::default(),
            &dictionary,
            &NoDefinitions,
            Box::new(MemoryStore::default()),
        )
        .unwrap();
        let app = App::new(controller);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();
    }
}
