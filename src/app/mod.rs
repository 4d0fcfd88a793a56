pub mod actions;
#[allow(clippy::module_inception)]
pub mod app;
pub mod handlers;
pub mod state;
pub mod updates;

pub use app::App;
pub use state::{DownloadTicket, InfoTicket, InputMode, Phase, Session};

use crossterm::event::KeyEvent;

impl App {
    pub fn on_tick(&mut self) {
        updates::on_tick(self);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        handlers::handle_key_event(self, key);
    }

    pub fn handle_paste(&mut self, text: String) {
        handlers::handle_paste(self, text);
    }
}
