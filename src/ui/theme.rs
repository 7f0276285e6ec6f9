use ratatui::style::Color;

/// Unified color theme for the application
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Secondary/border color
    pub fn secondary() -> Color {
        Color::Cyan
    }

    /// Warning/error text
    pub fn warn() -> Color {
        Color::Yellow
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Accent for titles and highlights
    pub fn accent() -> Color {
        Color::LightBlue
    }

    /// Active input field
    pub fn input_active() -> Color {
        Color::LightGreen
    }
}
