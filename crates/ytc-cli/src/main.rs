use ytc_core::{logging, status};

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let code = match Cli::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("ytc error: {:#}", err);
            status::INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}
