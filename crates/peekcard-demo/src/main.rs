#![forbid(unsafe_code)]

//! peekcard demo binary entry point.

use crossterm::event::{self, Event};
use peekcard_core::event::KeyEvent;
use peekcard_demo::app::{App, Flow};
use peekcard_demo::cli::Opts;
use peekcard_demo::session::Session;

fn main() {
    let opts = Opts::parse();
    if let Err(e) = run(&opts) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &Opts) -> std::io::Result<()> {
    let session = Session::new()?;
    let mut app = App::new(opts);
    let (width, height) = session.size()?;
    app.resize(width, height);

    loop {
        session.draw(&app.frame())?;
        match event::read()? {
            Event::Key(key) => {
                let Some(key) = KeyEvent::from_crossterm(key) else {
                    continue;
                };
                if app.on_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Resize(width, height) => app.resize(width, height),
            _ => {}
        }
    }
}
