use std::process::ExitCode;

use clap::Parser;
use range_deck::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    range_deck::init_logging();

    match range_deck::run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
