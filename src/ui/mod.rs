mod color_panel;
mod helpers;
mod profile_panel;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use theme::Theme;

const WELCOME_MESSAGE: &str = "Hello, welcome to Huebox!";

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(6),
            Constraint::Length(3),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Huebox  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color playground",
            Style::default()
                .fg(Theme::secondary())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(bordered_card(None));
    frame.render_widget(header, layout[0]);

    frame.render_widget(message_card(app), layout[1]);
    color_panel::render(frame, app, layout[2]);
    profile_panel::render(frame, app, layout[3]);

    let footer = Paragraph::new(Text::from(footer_line(app)))
        .alignment(Alignment::Left)
        .block(bordered_card(None));
    frame.render_widget(footer, layout[4]);
}

fn bordered_card(title: Option<&'static str>) -> Block<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()));
    match title {
        Some(title) => block.title(title),
        None => block,
    }
}

fn message_card(app: &App) -> Paragraph<'_> {
    let line = if app.show_message {
        Line::from(Span::styled(
            format!(" {WELCOME_MESSAGE}"),
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            " m: show the welcome message",
            Style::default().fg(Theme::dim()),
        ))
    };
    Paragraph::new(Text::from(vec![line])).block(bordered_card(Some(" Message ")))
}

fn footer_line(app: &App) -> Line<'_> {
    if let Some(status) = &app.status {
        return Line::from(Span::styled(
            format!(" {status}"),
            Style::default().fg(Theme::warn()),
        ));
    }
    let keys = if app.color_input_active {
        " type a color   enter/esc: done"
    } else {
        " e: edit color   s: suggest   c: clear   m: toggle message   q: quit"
    };
    Line::from(Span::styled(keys, Style::default().fg(Theme::dim())))
}
