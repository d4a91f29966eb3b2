mod app;
mod command;
mod config;
mod console;
mod folder;
mod history;

use std::io;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = config::Config::load()?;

    // Optional root folder name on the command line overrides the config.
    if args.len() > 1 {
        config.root = args[1].clone();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = app::App::new(&config, stdin.lock(), stdout.lock());
    app.run_demo().context("demo run failed")
}
