use ratatui::style::Color;

pub const THEME_BG: Color = Color::Rgb(20, 20, 25); // Dark slate/blue
pub const THEME_FG: Color = Color::Rgb(220, 220, 240); // Soft white
pub const THEME_ACCENT: Color = Color::Rgb(100, 200, 255); // Cyan-ish
pub const THEME_HIGHLIGHT: Color = Color::Rgb(230, 30, 30); // YouTube Red
pub const THEME_BORDER: Color = Color::Rgb(80, 80, 120); // Muted blue-purple
pub const THEME_SUCCESS: Color = Color::Rgb(80, 200, 120);
pub const THEME_MUTED: Color = Color::Rgb(130, 130, 150);
