mod app;
mod cli;
mod model;
mod sys;
mod tui;

use anyhow::Result;
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use ratatui_image::picker::Picker;
use std::{
    io,
    time::{Duration, Instant},
};
use sys::api::ApiClient;
use sys::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut config = Config::load();
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }
    if let Some(output) = cli.output {
        config.download_directory = output.to_string_lossy().to_string();
    }
    if cli.log {
        config.logging.enabled = true;
    }

    if let Err(e) = sys::logging::init_logger(config.log_path(), config.logging.enabled) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    log::info!(
        "Starting tubefetch v{} against {}, saving to {}",
        env!("CARGO_PKG_VERSION"),
        config.api_base_url,
        config.download_dir().display()
    );

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut picker = Picker::from_query_stdio().unwrap_or_else(|_| Picker::from_fontsize((8, 16)));

    let client = ApiClient::new(&config.api_base_url);
    let mut app = App::new(client, config.download_dir());

    if let Some(url) = cli.url {
        app::actions::set_url(&mut app, url);
        app::actions::request_video_info(&mut app);
    }

    let result = run(&mut terminal, &mut app, &mut picker);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("UI loop failed: {}", e);
    }
    log::info!("Exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    picker: &mut Picker,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    while app.running {
        terminal.draw(|f| tui::ui(f, app, picker))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key_event(key),
                Event::Paste(text) => app.handle_paste(text),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
