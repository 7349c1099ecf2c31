use crate::cards::{Card, Suit, Value};
use crate::game::RoundRecord;
use crate::showdown::Seat;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_height: u16 = 2 + 2;
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Min(6),                // seats
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let tally = app.game.tally();
    let round_no = app.current().map(|r| r.number).unwrap_or(0);
    let header_lines = vec![
        Line::from(format!("Seed: {}   Round: {}", app.game.seed(), round_no)),
        Line::from(format!(
            "Black {}  White {}  Ties {}",
            tally.black, tally.white, tally.ties
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("poker-showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let seat_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (area, seat) in seat_rows.iter().zip([Seat::Black, Seat::White]) {
        render_seat(f, *area, app, seat);
    }

    // Status bar: verdict on the left, keys on the right
    let status_area = chunks[2];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = match app.current() {
        None => vec![Line::from("No round dealt yet. Press Space to deal.")],
        Some(record) => vec![Line::from(Span::styled(
            record.verdict.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))],
    };
    if let Some(err) = app.deal_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let right_keys = vec![
        Line::from("Space deal • C codes"),
        Line::from("? help • H history • M menu • Q quit"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    }
}

fn render_seat(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let record = app.current();
    let mut title = seat.label().to_string();
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(r) = record {
        let code = r.verdict.code(seat);
        title.push_str(&format!(" - {}", code.category));
        if app.show_codes() {
            title.push_str(&format!(" [{code}]"));
        }
        match r.verdict.winner {
            Some(w) if w == seat => {
                title.push_str(" [WIN]");
                block = block.border_style(Style::default().fg(Color::Green));
            }
            None => block = block.border_style(Style::default().fg(Color::Yellow)),
            _ => block = block.border_style(Style::default().fg(Color::DarkGray)),
        }
    }
    f.render_widget(block.title(title), area);

    let seat_inner = inner(area);
    let card_width = seat_inner.width.saturating_sub(2) / 5;
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(card_width); 5])
        .split(seat_inner);
    let cards = record.map(|r| *r.round.hand(seat).cards());
    for (i, slot) in card_chunks.iter().enumerate() {
        render_card_widget(f, *slot, cards.map(|c| c[i]));
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        lines.extend(entries.iter().map(|entry| Line::from(history_line(entry))));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn history_line(entry: &RoundRecord) -> String {
    format!(
        "#{:<4} {}  vs  {}  {}",
        entry.number, entry.round.black, entry.round.white, entry.verdict
    )
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- Space / Enter: deal a new round"),
        Line::from("- C: show / hide rank codes"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply and start a new session"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
        Suit::Joker => ('*', Style::default().fg(Color::Magenta)),
    }
}

fn value_label(v: Value) -> String {
    match v {
        Value::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>) {
    let block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    let inner = inner(area);
    f.render_widget(block, area);
    let content = match card {
        Some(c) => {
            let (sg, style) = suit_glyph_and_style(c.suit());
            Line::from(Span::styled(format!("{}{}", value_label(c.value()), sg), style))
        }
        None => Line::from("[  ]"),
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
