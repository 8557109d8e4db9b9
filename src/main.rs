use charger_uptime::cli::{args::Args, commands};
use charger_uptime::constants::ERROR_SENTINEL;
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments; the failure contract requires the ERROR
    // sentinel on stdout and exit code 1, which clap does not do by default.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if err.use_stderr() {
                println!("{ERROR_SENTINEL}");
                let _ = err.print();
                process::exit(1);
            }
            // --help / --version
            let _ = err.print();
            process::exit(0);
        }
    };

    commands::setup_logging(&args);

    match commands::run(&args) {
        Ok(_stats) => {
            // Success: the report has already been written to stdout
            process::exit(0);
        }
        Err(error) => {
            println!("{ERROR_SENTINEL}");
            if error.is_validation() {
                eprintln!("Error: {error}");
            } else {
                eprintln!("Unexpected error: {error:#}");
            }
            process::exit(1);
        }
    }
}
