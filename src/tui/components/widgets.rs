use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::{THEME_ACCENT, THEME_FG};

pub fn label_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            label,
            Style::default().fg(THEME_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.into(), Style::default().fg(THEME_FG)),
    ])
}

pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result: String = s.chars().take(max_width - 3).collect();
    result.push_str("...");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("a long title here", 10), "a long ...");
        assert_eq!(truncate_str("abcdef", 2), "..");
    }
}
