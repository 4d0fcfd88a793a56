pub mod details;
pub mod error_banner;
pub mod format_selection;
pub mod status_bar;
pub mod theme;
pub mod url_bar;
pub mod widgets;
