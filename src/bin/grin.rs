//! Command-line driver for the Grin compressor.
//!
//! All interesting behavior lives in the library; this binary only parses
//! arguments, reports the outcome, and sets the exit status.

use std::env;
use std::process::ExitCode;

fn usage() -> ExitCode {
    eprintln!("Usage: grin <encode|decode> <infile> <outfile>");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        return usage();
    }
    let (operation, infile, outfile) = (&args[1], &args[2], &args[3]);

    let result = match operation.as_str() {
        "encode" => grin::encode(infile, outfile),
        "decode" => grin::decode(infile, outfile),
        other => {
            eprintln!("Invalid operation: {other}");
            return usage();
        }
    };

    match result {
        Ok(()) => {
            println!("Successfully {operation}d {infile} to {outfile}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("grin: {e}");
            ExitCode::FAILURE
        }
    }
}
