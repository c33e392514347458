use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::{Parser, ValueEnum};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use lagab::{
    display_error,
    errors::errors::Error,
    ir::{generator::gen_ir, ir::prettyprint_ir},
    lexer::lexer::{render_tokens, tokenize},
    parser::parser::parse,
};

/// Front end for the lagab language: tokenizes and parses a source file and
/// prints the requested stage's output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The input file.
    input: String,

    /// Whether the given input should be used directly as the source instead
    /// of as the source file path.
    #[clap(long, short, action)]
    source: bool,

    /// Which stage's output to print.
    #[arg(short, long, value_enum, default_value_t = Emit::Ast)]
    emit: Emit,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Tokens,
    Ast,
    Ir,
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli, source: &str) -> Result<(), Error> {
    let file_name = if cli.source {
        String::from("shell")
    } else {
        PathBuf::from(&cli.input)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.input.clone())
    };

    let start = Instant::now();
    let tokens = tokenize(source, Some(file_name.clone()))?;
    debug!(elapsed = ?start.elapsed(), "tokenized");

    if cli.emit == Emit::Tokens {
        print!("{}", render_tokens(&tokens));
        return Ok(());
    }

    let parse_start = Instant::now();
    let ast = parse(tokens, Rc::new(file_name))?;
    debug!(elapsed = ?parse_start.elapsed(), "parsed");

    if cli.emit == Emit::Ast {
        println!("{:#?}", ast);
        return Ok(());
    }

    let ir_start = Instant::now();
    let program = gen_ir(&ast)?;
    debug!(elapsed = ?ir_start.elapsed(), "ir generated");

    print!("{}", prettyprint_ir(&program));
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let source = if cli.source {
        cli.input.clone()
    } else {
        match read_to_string(&cli.input) {
            Ok(source) => source,
            Err(err) => {
                error!(path = %cli.input, "failed to read source file");
                eprintln!("Error: could not read `{}`: {}", cli.input, err);
                return ExitCode::FAILURE;
            }
        }
    };

    match run(&cli, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            display_error(&err, &source);
            ExitCode::FAILURE
        }
    }
}
