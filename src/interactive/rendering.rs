//! TUI rendering with ratatui

use super::app::{App, MessageStyle};
use crate::core::{KeyVerdict, Keyboard, TileVerdict};
use crate::game::{GameState, Statistics, Tile};
use crate::output::formatters::create_progress_bar;
use crate::persistence::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board and keyboard
            Constraint::Percentage(45), // Stats and messages
        ])
        .split(chunks[1]);

    render_game_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, chunks[2]);
}

fn render_header<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.controller.session();
    let header = Paragraph::new(format!(
        "🟩 {} #{} · {}",
        app.config.game_name.to_uppercase(),
        session.day(),
        session.day().date()
    ))
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

fn render_game_panel<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(15), // Board
            Constraint::Min(5),     // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app.controller.session().keyboard(), chunks[1]);
}

fn tile_style(verdict: TileVerdict) -> Style {
    match verdict {
        TileVerdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        TileVerdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        TileVerdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        TileVerdict::Filled => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        TileVerdict::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn tile_span(tile: Tile) -> Span<'static> {
    let letter = tile.letter.unwrap_or('·');
    Span::styled(format!(" {letter} "), tile_style(tile.verdict))
}

fn render_board<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let revealing = app.pending.as_ref().map(|p| p.row);

    let mut lines = Vec::new();
    for (i, row) in app.controller.session().rows().into_iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2 + 1);
        for tile in row {
            spans.push(tile_span(tile));
            spans.push(Span::raw(" "));
        }
        if revealing == Some(i) {
            spans.push(Span::styled("…", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let title = match app.controller.session().state() {
        GameState::Playing => " Board ",
        GameState::Won => " Solved! ",
        GameState::Lost => " Out of guesses ",
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(verdict: KeyVerdict) -> Style {
    match verdict {
        KeyVerdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyVerdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyVerdict::Absent => Style::default().fg(Color::DarkGray),
        KeyVerdict::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, keyboard: &Keyboard, area: Rect) {
    let lines: Vec<Line> = Keyboard::ROWS
        .iter()
        .map(|row| {
            Line::from(
                row.chars()
                    .flat_map(|c| {
                        [
                            Span::styled(format!(" {c} "), key_style(keyboard.get(c))),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let keys = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keys, area);
}

fn render_info_panel<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(65), // Statistics or help
            Constraint::Percentage(35), // Messages
        ])
        .split(area);

    if app.show_stats {
        render_statistics(f, app, chunks[0]);
    } else {
        render_help(f, chunks[0]);
    }
    render_messages(f, app, chunks[1]);
}

fn render_statistics<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let session = app.controller.session();
    let stats: &Statistics = session.statistics();

    let mut lines = vec![
        Line::from(format!("Played:         {}", stats.games_played)),
        Line::from(format!("Win %:          {}", stats.win_percentage())),
        Line::from(format!("Current streak: {}", stats.current_streak)),
        Line::from(format!("Max streak:     {}", stats.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    // Highlight the bucket today's win landed in
    let today = (session.state() == GameState::Won).then(|| session.guesses().len());
    let max = f64::from(stats.max_bucket());
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let color = if today == Some(i + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(
                create_progress_bar(f64::from(count), max, 16),
                Style::default().fg(color),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(text) = &app.shared {
        lines.push(Line::from(""));
        lines.extend(text.lines().map(|l| Line::from(l.to_string())));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let example = |letter: char, verdict: TileVerdict, text: &'static str| {
        Line::from(vec![
            Span::styled(format!(" {letter} "), tile_style(verdict)),
            Span::raw(text),
        ])
    };

    let lines = vec![
        Line::from("Guess the word in six tries."),
        Line::from("Each guess must be a valid five-letter word."),
        Line::from(""),
        example('W', TileVerdict::Correct, " in the word and in the right spot"),
        example('I', TileVerdict::Present, " in the word but in the wrong spot"),
        example('U', TileVerdict::Absent, " not in the word"),
        Line::from(""),
        Line::from("A new puzzle is available each day."),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" How to play ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(panel, area);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "Enter: Submit | Tab: Stats | Ctrl-S: Share | Ctrl-R: Restart | Esc: Quit",
    )
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
