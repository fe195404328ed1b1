//! Terminal UI for Strictly Tic-Tac-Toe

mod app;
mod input;
mod ui;

pub use app::App;
pub use input::{Action, action_for_key, cell_at, move_cursor};

use crate::config::GameConfig;
use crate::session::GameSession;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Run the TUI with the given configuration.
pub fn run(config: &GameConfig, log_file: &Path) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(mode = %config.mode(), level = config.level(), "Starting Strictly Tic-Tac-Toe TUI");

    let session = GameSession::new(config)?;
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Draw, let the engine move, then wait briefly for input.
#[instrument(skip_all)]
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut board_area = Rect::default();

    loop {
        terminal.draw(|f| board_area = ui::draw(f, app))?;

        if app.session().is_engine_turn() {
            app.engine_turn();
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(board_area, mouse.column, mouse.row);
                }
                _ => {}
            }
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
