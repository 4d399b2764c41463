mod app;
mod command;
mod consts;
mod game;
mod util;
use crate::app::App;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::io::ErrorKind;
use std::process::ExitCode;

fn main() -> ExitCode {
    match parse_args() {
        Ok(Action::Run) => match run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Action::Help) => {
            println!("Usage: gridsnake [-h|--help] [-V|--version]");
            println!();
            println!("Steer the snake with the arrow keys and eat the food.");
            println!("Space/Enter pauses & resumes, r restarts, q quits.");
            ExitCode::SUCCESS
        }
        Ok(Action::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    Run,
    Help,
    Version,
}

fn parse_args() -> Result<Action, lexopt::Error> {
    let mut parser = Parser::from_env();
    while let Some(arg) = parser.next()? {
        match arg {
            Arg::Short('h') | Arg::Long("help") => return Ok(Action::Help),
            Arg::Short('V') | Arg::Long("version") => return Ok(Action::Version),
            other => return Err(other.unexpected()),
        }
    }
    Ok(Action::Run)
}

fn run() -> anyhow::Result<()> {
    let terminal = ratatui::init();
    let r = App::new().run(terminal);
    ratatui::restore();
    match r {
        // A closed output pipe is not worth reporting.
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("error while running the game"),
    }
}
