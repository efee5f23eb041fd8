// Hanoi: non-recursive Tower of Hanoi with a terminal visualizer

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use hanoi::config::{Cli, Config};
use hanoi::logging;
use hanoi::puzzle::{Outcome, Simulation};
use hanoi::ui::{App, TextRenderer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments, prompting for the disk count if needed
    let config = match Config::resolve(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.log_file, config.verbose, config.headless)?;
    log::info!(
        "starting with {} disks, {}ms per frame",
        config.num_disks,
        config.delay.as_millis()
    );

    let mut sim = match config.goal {
        Some(goal) => Simulation::with_goal(config.num_disks, goal)?,
        None => Simulation::new(config.num_disks),
    };

    if config.headless {
        let stdout = io::stdout();
        let mut renderer = TextRenderer::new(stdout.lock(), config.num_disks)
            .with_color(config.color)
            .with_delay(config.delay);
        let outcome = sim.run(&mut renderer)?;
        report(outcome);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(terminal, config.num_disks, config.delay);
    let res = sim.run(&mut app).and_then(|outcome| {
        if outcome.is_solved() {
            app.wait_for_quit()?;
        }
        Ok(outcome)
    });

    // Restore terminal
    disable_raw_mode()?;
    execute!(app.terminal_mut().backend_mut(), LeaveAlternateScreen)?;
    app.terminal_mut().show_cursor()?;

    match res {
        Ok(outcome) => report(outcome),
        Err(err) => {
            log::error!("renderer failed: {}", err);
            eprintln!("Error: {:?}", err);
        }
    }

    Ok(())
}

fn report(outcome: Outcome) {
    let stats = outcome.stats();
    match outcome {
        Outcome::Solved(_) => println!("Solved in {} moves.", stats.moves),
        Outcome::Aborted(_) => println!("Stopped after {} moves.", stats.moves),
    }
}
