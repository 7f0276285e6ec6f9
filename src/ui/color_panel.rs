use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;

use super::helpers::{FALLBACK_BG, PREVIEW_FG, candidate_color};
use super::theme::Theme;

const PLACEHOLDER: &str = "I am a boring box with no color.";
const PLACEHOLDER_HINT: &str = "Please enter a color to make me colorful.";

/// Background of the preview box: the candidate when valid, else the
/// neutral fallback.
pub(crate) fn preview_background(candidate: &str) -> Color {
    candidate_color(candidate).unwrap_or(FALLBACK_BG)
}

/// Label inside the preview box: the candidate when valid and non-empty,
/// else the placeholder message.
pub(crate) fn preview_label(candidate: &str) -> Vec<String> {
    if candidate_color(candidate).is_some() && !candidate.trim().is_empty() {
        vec![candidate.to_string()]
    } else {
        vec![PLACEHOLDER.to_string(), PLACEHOLDER_HINT.to_string()]
    }
}

pub(crate) fn render(frame: &mut Frame, app: &App, area: Rect) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
        .title(" Color ");
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(inner);

    frame.render_widget(input_line(app), rows[0]);

    // Validity is recomputed from the candidate on every frame; the box can
    // never show a stale color.
    let candidate = app.color_candidate.as_str();
    let label = preview_label(candidate)
        .into_iter()
        .map(Line::from)
        .collect::<Vec<_>>();
    let box_height = label.len() as u16 + 2;
    let preview_area = centered_box(rows[1], 44, box_height);
    let preview = Paragraph::new(Text::from(label))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(PREVIEW_FG)
                .bg(preview_background(candidate)),
        );
    frame.render_widget(preview, preview_area);
}

fn input_line(app: &App) -> Paragraph<'_> {
    let label_style = Style::default().fg(Theme::dim());
    let value_style = if app.color_input_active {
        Style::default()
            .fg(Theme::input_active())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::text())
    };
    let mut spans = vec![
        Span::styled(" Enter a color name: ", label_style),
        Span::styled(app.color_candidate.as_str(), value_style),
    ];
    if app.color_input_active {
        spans.push(Span::styled("_", value_style));
    } else if app.color_candidate.is_empty() {
        spans.push(Span::styled("e.g. blue, red, green", label_style));
    }
    Paragraph::new(Line::from(spans))
}

/// A box of at most the given size, centered inside `area`.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_candidate_fills_the_box() {
        assert_eq!(preview_background("blue"), Color::Rgb(0, 0, 255));
        assert_eq!(preview_label("blue"), vec!["blue".to_string()]);
    }

    #[test]
    fn empty_candidate_shows_placeholder() {
        assert_eq!(preview_background(""), FALLBACK_BG);
        let label = preview_label("");
        assert_eq!(label[0], PLACEHOLDER);
    }

    #[test]
    fn invalid_candidate_shows_placeholder_not_raw_text() {
        assert_eq!(preview_background("zzzqqq"), FALLBACK_BG);
        let label = preview_label("zzzqqq");
        assert!(!label.contains(&"zzzqqq".to_string()));
        assert_eq!(label[0], PLACEHOLDER);
    }

    #[test]
    fn functional_forms_are_previewable() {
        assert_eq!(
            preview_background("rgb(18, 52, 86)"),
            Color::Rgb(18, 52, 86)
        );
        assert_eq!(
            preview_label("rgb(18, 52, 86)"),
            vec!["rgb(18, 52, 86)".to_string()]
        );
    }
}
