use std::fs;

use clap::Parser;
use log::LevelFilter;
use pascalina::run_program;

/// pascalina runs programs written in a small Pascal-like language and
/// prints the final values of the program's variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pascalina to look at a file instead of a program given inline.
    #[arg(short, long)]
    file: bool,

    /// Raises the log level; repeat for more detail (-v info, -vv debug,
    /// -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match run_program(&source) {
        Ok(record) => println!("{record}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
