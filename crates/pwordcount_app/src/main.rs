mod app;
mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use engine_logging::{engine_debug, engine_warn};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    let Some(file_name) = cli.file_name.clone() else {
        cli::print_usage();
        return ExitCode::FAILURE;
    };

    engine_logging::initialize(engine_logging::level_for_verbosity(cli.verbose));
    if !cli.ignored.is_empty() {
        engine_debug!("ignoring extra arguments {:?}", cli.ignored);
    }

    match app::run(&file_name, &cli.pipeline_config()) {
        Ok(total) => {
            let mut out = io::stdout().lock();
            match writeln!(out, "Process 1: The total number of words is {total}.")
                .and_then(|()| out.flush())
            {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    engine_warn!("could not print result: {}", err);
                    ExitCode::FAILURE
                }
            }
        }
        Err(err) => {
            eprintln!("{}", app::diagnostic(&err, &file_name));
            ExitCode::FAILURE
        }
    }
}
