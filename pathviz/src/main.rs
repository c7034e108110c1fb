//! pathviz: watch Dijkstra's algorithm explore a grid in the terminal.
//!
//! Logging goes to stderr and is off unless `RUST_LOG` is set, e.g.
//! `RUST_LOG=debug pathviz 2> pathviz.log`.

use std::time::{Duration, Instant};

use pathviz::{App, Config, Flow, Terminal};

/// Upper bound on how long a poll blocks, so the animation keeps moving.
const FRAME: Duration = Duration::from_millis(8);

fn run(term: &mut Terminal) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(Config::default())?;
    term.init()?;

    loop {
        let now = Instant::now();
        app.tick(now);
        if app.take_dirty() {
            term.draw(&app)?;
        }

        let timeout = if app.is_animating() {
            FRAME
        } else {
            Duration::from_millis(100)
        };
        if let Some(input) = term.poll(timeout)? {
            if app.update(input, Instant::now()) == Flow::Quit {
                break;
            }
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let mut term = Terminal::new();
    let result = run(&mut term);
    if let Err(e) = term.close() {
        log::error!("failed to restore terminal: {e}");
    }
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
