use clap::Parser;
use device_catalog_parser::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            // Print the full context chain to stderr
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
