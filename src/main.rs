use clap::{CommandFactory, Parser};
use nowaf::cli::Cli;
use nowaf::{logging, run, Output};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    if let Err(e) = logging::init_logger(cli.verbose) {
        eprintln!("Error: {}", e);
    }

    match run(&cli) {
        Ok(Output::Listing(text)) => print!("{}", text),
        Ok(Output::Help) => {
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
            }
        }
        Ok(Output::Payload(outcome)) => println!("{}", outcome.text()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
