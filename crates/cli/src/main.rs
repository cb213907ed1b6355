use colored::*;
use std::{
    fs,
    io,
    path::{Path, PathBuf},
    process,
};
use clap::Parser as ClapParser;
use tracing::debug;

extern crate frontend;
extern crate runtime;

use frontend::lexer::Lexer;
use frontend::parser::Parser;
use runtime::{
    environment::DEFAULT_MAX_CALL_DEPTH,
    interpreter::{EvalConfig, Interpreter},
};


// --------
//   CLI
// --------

#[derive(ClapParser)]
#[command(version)]
#[command(about="Interpreter for Tally scripts")]
struct CLI {
    /// Path to the script to run
    file: PathBuf,

    /// Prints the AST tree before running
    #[arg(short, long)]
    ast_print: bool,

    /// Maximum number of nested calls, MAIN included
    #[arg(short, long, default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_depth: usize,

    /// Logs function registration and calls on stderr
    #[arg(short, long)]
    verbose: bool,
}


// stdout belongs to the script, logs go to stderr
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).with_level(true))
        .with(filter)
        .init();
}

fn open_file(file_path: &Path) -> Result<String, io::Error> {
    fs::read_to_string(file_path)
}

// Returns false if anything went wrong, the error is already printed
fn interpretation_sequence(code: String, cli: &CLI) -> bool {
    let mut lexer: Lexer = Default::default();
    let mut parser: Parser = Default::default();

    if let Err(e) = lexer.tokenize(code) {
        println!("{e}");
        return false;
    }

    let program = match parser.build_ast(std::mem::take(&mut lexer.tokens)) {
        Ok(program) => program,
        Err(e) => {
            println!("{e}");
            return false;
        }
    };

    debug!(functions = program.functions.len(), statements = program.main.len(), "program parsed");

    if cli.ast_print {
        println!("\nProgram AST:\n{:#?}\n", program);
    }

    let config = EvalConfig {
        max_call_depth: cli.max_depth,
    };
    let mut interp = Interpreter::with_config(io::stdout(), config);

    match interp.execute_program(&program) {
        Ok(_) => true,
        Err(e) => {
            println!("{e}");
            false
        }
    }
}

fn main() {
    // Manage command line args
    let cli = CLI::parse();

    init_tracing(cli.verbose);

    let source_code = match open_file(&cli.file) {
        Ok(code) => code,
        Err(e) => {
            println!(
                "{} opening script file {}: {e}",
                "Error".red().bold(),
                cli.file.display().to_string().green()
            );
            process::exit(1);
        }
    };

    if !interpretation_sequence(source_code, &cli) {
        process::exit(1);
    }
}
