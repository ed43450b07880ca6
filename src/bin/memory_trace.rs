// Corrupted memory trace viewer

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use historian::cli::{self, HistorianError};
use historian::interpreter::constants::SNAPSHOT_MEMORY_LIMIT;
use historian::interpreter::session::ScanSession;
use historian::ui::App;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_logging();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report_failure(&err),
    }
}

fn run(args: &[String]) -> Result<(), HistorianError> {
    let path = cli::input_path(args, "memory-trace")?;
    let source = cli::load_input(path)?;

    let mut session = ScanSession::new(&source, SNAPSHOT_MEMORY_LIMIT)?;
    info!(
        "recorded {} steps for {}",
        session.total_snapshots(),
        path
    );
    session.rewind_to_start()?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, source);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;

    let last = app.session.final_snapshot();
    println!("The sum of all valid multiplications is: {}", last.total_sum);
    println!("The sum of enabled multiplications is: {}", last.enabled_sum);

    Ok(())
}
