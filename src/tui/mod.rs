//! Terminal UI: rendering and the event pump.

mod app;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use simply_tictactoe::{
    DeferredMove, Effect, GameController, GameMode, RandomSelector, spawn_deferred_move,
};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// Runtime options resolved from the CLI.
pub struct Options {
    /// Starting mode.
    pub mode: GameMode,
    /// Fixed seed for the computer opponent, if any.
    pub seed: Option<u64>,
    /// Thinking delay for the computer move.
    pub delay: Duration,
}

/// Runs the TUI until the user quits.
pub async fn run(options: Options) -> Result<()> {
    // Log to a file so tracing output does not fight the terminal.
    let log_file = std::fs::File::create("simply_tictactoe.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(mode = options.mode.name(), "starting simply_tictactoe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, options).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// Event loop: draw, drain elapsed deferrals, handle one key.
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    options: Options,
) -> Result<()> {
    let selector = match options.seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::new(),
    };
    let mut app = App::new(GameController::new(options.mode, Box::new(selector)));
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel::<DeferredMove>();

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        // Deferred computer moves land between frames.
        while let Ok(mv) = timer_rx.try_recv() {
            debug!(?mv, "deferred move elapsed");
            app.controller_mut().apply_deferred(mv);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(Effect::ScheduleComputerMove(mv)) = app.handle_key(key.code) {
                    spawn_deferred_move(mv, options.delay, timer_tx.clone());
                }
            }
        }

        if app.should_quit() {
            info!("user quit");
            return Ok(());
        }
    }
}
