use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::transcript::Role;

pub fn render(app: &mut App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // transcript
            Constraint::Length(3), // input
            Constraint::Length(1), // footer
        ])
        .split(area);

    render_transcript(app, frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);
}

fn render_transcript(app: &mut App, frame: &mut Frame, area: ratatui::layout::Rect) {
    // Inner dimensions feed the scroll-to-bottom math
    app.chat_height = area.height.saturating_sub(2);
    app.chat_width = area.width.saturating_sub(2);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Consuelo ");

    let text = if app.transcript.is_empty() && !app.waiting() {
        Text::from(Span::styled(
            "Say what's on your mind and press Enter...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut lines: Vec<Line> = Vec::new();

        for entry in app.transcript.entries() {
            match entry.role {
                Role::User => {
                    lines.push(Line::from(Span::styled(
                        "You:",
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )));
                    for line in entry.text.lines() {
                        lines.push(Line::from(line));
                    }
                }
                Role::Bot => {
                    lines.push(Line::from(Span::styled(
                        "AI:",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )));
                    for line in entry.text.lines() {
                        lines.push(Line::from(line));
                    }
                }
                Role::Meta => {
                    lines.push(Line::from(Span::styled(
                        "*",
                        Style::default().fg(Color::Magenta),
                    )));
                    for line in entry.text.lines() {
                        lines.push(Line::from(Span::styled(
                            line,
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::ITALIC),
                        )));
                    }
                }
            }
            lines.push(Line::default());
        }

        if app.waiting() {
            lines.push(Line::from(Span::styled(
                "AI:",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            // Animated ellipsis: cycles through ".", "..", "..."
            let dots = ".".repeat((app.animation_frame as usize) + 1);
            lines.push(Line::from(Span::styled(
                format!("Typing{}", dots),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        Text::from(lines)
    };

    let transcript = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.scroll, 0));

    frame.render_widget(transcript, area);
}

fn render_input(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let border_color = if app.waiting() {
        Color::DarkGray
    } else {
        Color::Yellow
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Message (Enter to send) ");

    // Horizontal scroll keeps the cursor visible for long input
    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll_offset = if inner_width == 0 {
        0
    } else if app.cursor >= inner_width {
        app.cursor - inner_width + 1
    } else {
        0
    };

    let visible_text: String = app
        .input
        .chars()
        .skip(scroll_offset)
        .take(inner_width)
        .collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(block);

    frame.render_widget(input, area);

    if !app.waiting() {
        let cursor_x = (app.cursor - scroll_offset) as u16;
        frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.endpoint()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "| ↑/↓ scroll | Esc quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(err) = &app.last_error {
        spans.push(Span::styled(
            format!("| {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::DIM),
        ));
    }

    let footer = Paragraph::new(Line::from(spans));
    frame.render_widget(footer, area);
}
