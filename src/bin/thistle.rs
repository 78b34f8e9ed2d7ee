use std::{path::PathBuf, process};

use clap::{Parser, Subcommand};

use thistle::{Interpreter, Repl, ThistleError};

#[derive(Parser)]
#[command(author, version, about = "Thistle stack language interpreter")]
struct Args {
    /// Directory scanned for operator extensions at startup
    #[arg(long, value_name = "DIR", default_value = "plugins")]
    plugins: PathBuf,

    /// Start without loading any extensions
    #[arg(long)]
    no_plugins: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run a Thistle script file
    Run { script: PathBuf },
    /// Start an interactive session
    Repl,
    /// Evaluate one line of Thistle code
    Eval { source: String },
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ThistleError> {
    let mut interpreter = Interpreter::new();
    if !args.no_plugins {
        interpreter.load_extensions(&args.plugins);
    }

    match args.command.unwrap_or(Command::Repl) {
        Command::Run { script } => interpreter.exec_script(script),
        Command::Repl => Repl::new(interpreter).run(),
        Command::Eval { source } => interpreter.exec_line(&source),
    }
}
