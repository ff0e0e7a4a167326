//! stackpad binary - batch replay, then the interactive screen.

use std::process::ExitCode;

use clap::Parser;

use stackpad::batch;
use stackpad::cli::Args;
use stackpad::engine::Engine;
use stackpad::ui;

fn main() -> ExitCode {
    let args = Args::parse();
    let mut engine = Engine::new();

    match args.batch_tokens() {
        Ok(Some(tokens)) => batch::replay(&mut engine, &tokens),
        Ok(None) => {}
        Err(error) => {
            eprintln!("ERROR: {error}");
            return ExitCode::FAILURE;
        }
    }

    if let Err(error) = ui::run(&mut engine) {
        eprintln!("ERROR: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
