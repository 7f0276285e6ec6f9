use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;
use crate::types::{ProfileState, UserRecord};

use super::theme::Theme;

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
        .title(" User Profile ");
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let lines = match &app.profile {
        ProfileState::Loading => vec![Line::from(Span::styled(
            " Loading user profile...",
            Style::default().fg(Theme::dim()),
        ))],
        ProfileState::Error(message) => vec![Line::from(Span::styled(
            format!(" Error: {message}"),
            Style::default().fg(Theme::warn()),
        ))],
        ProfileState::Loaded(user) => loaded_lines(app, user),
    };

    frame.render_widget(
        Paragraph::new(Text::from(lines)).style(Style::default().fg(Theme::text())),
        inner,
    );
}

fn loaded_lines<'a>(app: &'a App, user: &'a UserRecord) -> Vec<Line<'a>> {
    let field = |label: &'static str, value: &'a str| {
        Line::from(vec![
            Span::styled(
                format!(" {label}: "),
                Style::default().fg(Theme::dim()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(Theme::text())),
        ])
    };
    let mut lines = vec![
        field("Name", &user.name),
        field("Email", &user.email),
        Line::from(vec![
            Span::styled(
                " Address: ",
                Style::default().fg(Theme::dim()).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "{}, {}, {}, {}",
                    user.address.street, user.address.suite, user.address.city,
                    user.address.zipcode
                ),
                Style::default().fg(Theme::text()),
            ),
        ]),
    ];
    if let Some(loaded_at) = app.profile_loaded_at {
        lines.push(Line::from(Span::styled(
            format!(" loaded at {}", loaded_at.format("%H:%M:%S")),
            Style::default().fg(Theme::dim()),
        )));
    }
    lines
}
