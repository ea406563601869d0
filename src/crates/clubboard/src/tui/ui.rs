//! Terminal UI rendering with ratatui

use super::app::App;
use crate::board::{thai_date, ClubRow};
use crate::config::{Layout as BoardLayout, UiLabels};
use crate::refresher::PollFailure;
use crate::status::Tone;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Height of one card, borders included
const CARD_HEIGHT: u16 = 6;

/// Longest error detail shown, in characters
const DETAIL_WIDTH: usize = 72;

/// Render the main TUI frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Footer/Status
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_main_content(f, app, chunks[1]);
    draw_footer(f, app, chunks[2]);
}

/// Color for a status tone
pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Red => Color::Red,
        Tone::Amber => Color::Yellow,
        Tone::Green => Color::Green,
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.labels().title.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} [Tab]", app.layout()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
    .alignment(Alignment::Center);

    f.render_widget(header, area);
}

fn draw_main_content(f: &mut Frame, app: &App, area: Rect) {
    if let Some(failure) = app.error() {
        draw_error(f, app.labels(), failure, area);
        return;
    }

    if app.is_loading() {
        draw_notice(f, &app.labels().loading, area);
        return;
    }

    let rows = app.rows();
    if rows.is_empty() {
        draw_notice(f, &app.labels().empty, area);
        return;
    }

    match app.layout() {
        BoardLayout::Table => {
            let visible = rows.get(app.scroll..).unwrap_or(&[]);
            let title = format!(" {} ", rows.len());
            f.render_widget(club_table(visible, app.labels(), title), area);
        }
        BoardLayout::Cards => draw_cards(f, app, &rows, area),
        BoardLayout::Split => draw_split(f, app, &rows, area),
    }
}

/// Error panel with the manual retry action
fn draw_error(f: &mut Frame, labels: &UiLabels, failure: &PollFailure, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            failure.message.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(" [r] {} ", labels.retry),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail_line(&failure.detail),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        )
        .alignment(Alignment::Center);

    f.render_widget(panel, centered(area, 80, 8));
}

fn draw_notice(f: &mut Frame, text: &str, area: Rect) {
    let notice = Paragraph::new(Span::styled(
        text,
        Style::default().fg(Color::Blue).add_modifier(Modifier::ITALIC),
    ))
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);

    f.render_widget(notice, centered(area, 60, 3));
}

fn club_table<'a>(rows: &'a [ClubRow], labels: &'a UiLabels, title: String) -> Table<'a> {
    let header = Row::new(vec![
        Cell::from(labels.name.as_str()),
        Cell::from(Line::from(labels.total.as_str()).alignment(Alignment::Right)),
        Cell::from(Line::from(labels.registered.as_str()).alignment(Alignment::Right)),
        Cell::from(Line::from(labels.remaining.as_str()).alignment(Alignment::Right)),
        Cell::from(labels.status.as_str()),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(
                    row.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Cell::from(Line::from(row.total_text.as_str()).alignment(Alignment::Right)),
                Cell::from(Line::from(row.registered_text.as_str()).alignment(Alignment::Right)),
                Cell::from(Line::from(row.remaining_text.as_str()).alignment(Alignment::Right)),
                Cell::from(Span::styled(
                    row.label.as_str(),
                    Style::default()
                        .fg(tone_color(row.tone))
                        .add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::default().title(title).borders(Borders::ALL))
}

fn draw_split(f: &mut Frame, app: &App, rows: &[ClubRow], area: Rect) {
    let half = (rows.len() + 1) / 2;
    let (left, right) = rows.split_at(half);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sides = [(left, 0usize, halves[0]), (right, half, halves[1])];
    for (side, first, side_area) in sides {
        let visible = side.get(app.scroll..).unwrap_or(&[]);
        let title = if side.is_empty() {
            String::new()
        } else {
            format!(" {}-{} ", first + 1, first + side.len())
        };
        f.render_widget(club_table(visible, app.labels(), title), side_area);
    }
}

fn draw_cards(f: &mut Frame, app: &App, rows: &[ClubRow], area: Rect) {
    let per_line: usize = if area.width >= 96 {
        3
    } else if area.width >= 64 {
        2
    } else {
        1
    };
    let visible_lines = usize::from((area.height / CARD_HEIGHT).max(1));
    let start = (app.scroll / per_line) * per_line;
    let visible = rows.get(start..).unwrap_or(&[]);

    for (line, cards) in visible.chunks(per_line).take(visible_lines).enumerate() {
        let y = area.y + (line as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let line_area = Rect::new(area.x, y, area.width, height);

        let slots = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, per_line as u32); per_line])
            .split(line_area);

        for (row, slot) in cards.iter().zip(slots.iter()) {
            f.render_widget(club_card(row, app.labels()), *slot);
        }
    }
}

fn club_card<'a>(row: &'a ClubRow, labels: &'a UiLabels) -> Paragraph<'a> {
    let color = tone_color(row.tone);
    let dim = Style::default().fg(Color::DarkGray);

    let content = vec![
        Line::from(vec![
            Span::styled(format!("{} ", labels.total), dim),
            Span::raw(row.total_text.as_str()),
            Span::styled(format!("  {} ", labels.registered), dim),
            Span::raw(row.registered_text.as_str()),
        ]),
        Line::from(vec![
            Span::styled(format!("{} ", labels.remaining), dim),
            Span::styled(
                row.remaining_text.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            row.label.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];

    Paragraph::new(content).block(
        Block::default()
            .title(Span::styled(
                format!(" {} ", row.name),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    )
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let labels = app.labels();
    let mut parts = vec![format!("[r] {}  [q] quit", labels.retry)];

    if let Some(at) = app.snapshot().last_updated {
        parts.push(format!("{}: {}", labels.last_updated, thai_date(&at)));
    }
    if !app.is_loading() {
        parts.push(format!("{}: {}", labels.count, app.row_count()));
    }
    if let Some(failure) = app.error() {
        parts.push(detail_line(&failure.detail));
    }

    let style = if app.error().is_some() {
        Style::default().bg(Color::Red).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };

    let footer = Paragraph::new(format!(" {} ", parts.join(" · ")))
        .style(style)
        .alignment(Alignment::Left);

    f.render_widget(footer, area);
}

/// First line of an error detail, cut to `DETAIL_WIDTH` characters
fn detail_line(detail: &str) -> String {
    let first = detail.lines().next().unwrap_or_default().trim_end();
    if first.chars().count() > DETAIL_WIDTH {
        let mut cut: String = first.chars().take(DETAIL_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        first.to_string()
    }
}

/// Rectangle of `percent_x` width and `height` rows centered in `area`
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = area.width.saturating_mul(percent_x) / 100;
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
