//! pocket-calc: chained calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc                          # Dark theme, mouse enabled
//! pocket-calc --theme light --no-mouse
//! pocket-calc -vv --log-file calc.log  # Log every transition
//! ```

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use pocket_calc::{
    cli::{build_config, Cli},
    config::AppConfig,
    error::AppResult,
    logging,
    tui::{keypad_area, render, CalculatorApp, InputHandler, TerminalGuard},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let logging_to_file = logging::init(config.verbosity, cli.log_file.as_deref())?;
    if !logging_to_file && config.verbosity.is_verbose() {
        eprintln!("warning: -v has no effect without --log-file");
    }

    info!(theme = %config.theme, mouse = config.mouse, "starting");

    // Dropping the guard on any early return restores the terminal.
    let mut guard = TerminalGuard::enter(config.mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_app(&mut terminal, &config);
    let restored = guard.restore();
    let cursor = terminal.show_cursor();

    info!("exiting");
    result.and(restored.map_err(Into::into)).and(cursor.map_err(Into::into))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &AppConfig,
) -> AppResult<()> {
    let mut app = CalculatorApp::with_config(config);
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_key_action(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if !app.click(keypad_area(area), column, row) {
                    warn!(column, row, "click outside keypad buttons");
                }
            }
            _ => {}
        }
    }

    Ok(())
}
