use std::{fs, io, process, thread};

use clap::Parser;
use log::LevelFilter;
use nula::{execute_with, interpreter::foreign::ProcessExecutor};

/// Stack size of the thread that runs the program. Large enough for
/// `MAX_CALL_DEPTH` nested calls in an unoptimized build.
const INTERPRETER_STACK_SIZE: usize = 256 * 1024 * 1024;

/// nula runs programs written in the Nula scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells nula to read `contents` as a file path instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Interpreter program used to run embedded Python code.
    #[arg(long, env = "NULA_PYTHON", default_value = nula::interpreter::foreign::DEFAULT_PYTHON)]
    python: String,

    /// Raises log verbosity; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,

    contents: String,
}

impl Args {
    const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new().filter_level(args.log_level())
                              .parse_default_env()
                              .init();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    let python = args.python;
    let interpreter =
        thread::Builder::new().name("nula".to_string())
                              .stack_size(INTERPRETER_STACK_SIZE)
                              .spawn(move || {
                                  execute_with(&script, io::stdout(), ProcessExecutor::new(python))
                              })
                              .unwrap_or_else(|e| {
                                  eprintln!("Failed to start the interpreter thread: {e}");
                                  process::exit(1);
                              });

    match interpreter.join() {
        Ok(Ok(())) => {},
        Ok(Err(e)) => {
            eprintln!("{e}");
            process::exit(1);
        },
        // The panic message has already been printed by the hook.
        Err(_) => process::exit(1),
    }
}
