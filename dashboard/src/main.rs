mod args;
mod transport;
mod ui;

use std::io::{self, BufRead, Write};

use blog_core::app::{update, AppState, Event, Page};
use blog_core::BlogApi;
use clap::Parser;
use tracing::info;

use crate::args::Args;
use crate::transport::UreqTransport;
use crate::ui::Outcome;

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .init();
    info!(base_url = %args.base_url, "starting blog dashboard");

    let mut state = AppState::new();
    let mut api = BlogApi::new(&args.base_url, UreqTransport::new());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Blog Dashboard")?;
    update(&mut state, &mut api, Event::Navigate(Page::List), &today());

    // Single-threaded, synchronous: render, read one line, dispatch.
    // Each command triggers at most one blocking HTTP call (plus a list
    // refresh after a successful mutation) before the next render.
    loop {
        ui::render(&mut state, &mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if ui::dispatch(&mut state, &mut api, &line, &mut input, &mut out, &today())?
            == Outcome::Quit
        {
            break;
        }
    }
    Ok(())
}
