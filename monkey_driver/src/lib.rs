//! The command line front-end of the Monkey lexer: dumps the token stream of a file, or runs a
//! read-lex-print loop over the standard input.

use std::{
    cell::Cell,
    fmt::Display,
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

pub use clap::Parser;
use monkey_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::SourceFile,
};
use monkey_lexical::{error, token::TokenKind, token_stream::TokenStream};

/// The prompt printed before every line read by the REPL.
pub const PROMPT: &str = ">> ";

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "monkey",
    about = "Prints the tokens of Monkey source code.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The input file to tokenize. Starts a REPL reading the standard input when omitted.
    pub file: Option<PathBuf>,
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error
/// stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Installs the `tracing` subscriber; the scanner's debug output is shown when `RUST_LOG` is
/// set, e.g. `RUST_LOG=monkey_lexical=debug`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var_os("RUST_LOG").is_some() {
        // a subscriber installed by an embedding program takes precedence
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .try_init();
    }
}

/// Writes one line per token of the stream: its tag followed by its literal.
///
/// # Errors
/// Returns the error of the underlying writer.
pub fn write_tokens(output: &mut impl Write, token_stream: &TokenStream) -> io::Result<()> {
    for token in token_stream.iter() {
        if token.kind == TokenKind::Eof {
            writeln!(output, "{}", token.kind)?;
        } else {
            writeln!(output, "{} {}", token.kind, token.literal())?;
        }
    }

    Ok(())
}

fn report(display: impl Display) {
    eprintln!("{}", Message::new(Severity::Error, display));
}

fn dump_file(path: PathBuf) -> ExitCode {
    let source_file = match SourceFile::open(&path) {
        Ok(source_file) => source_file,
        Err(error) => {
            report(format_args!("{}: {error}", path.display()));
            return ExitCode::FAILURE;
        }
    };

    let printer = Printer::default();
    let token_stream = TokenStream::tokenize(&source_file, &printer);
    tracing::debug!(tokens = token_stream.len(), path = %path.display(), "tokenized file");

    if let Err(error) = write_tokens(&mut io::stdout().lock(), &token_stream) {
        report(format_args!("failed to write the tokens: {error}"));
        return ExitCode::FAILURE;
    }

    if printer.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Runs the read-lex-print loop until `input` is exhausted.
///
/// Every line is tokenized on its own; illegal characters are reported through `handler` and
/// never end the loop.
///
/// # Errors
/// Returns the first error of reading `input` or writing `output`.
pub fn repl(
    input: &mut impl BufRead,
    output: &mut impl Write,
    handler: &dyn Handler<error::Error>,
) -> io::Result<()> {
    let mut line = String::new();
    let mut line_number = 0_usize;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        line_number += 1;

        let source_file = SourceFile::from_string(format!("<stdin:{line_number}>"), line.clone());
        let token_stream = TokenStream::tokenize(&source_file, handler);

        write_tokens(output, &token_stream)?;
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    init_tracing();

    let Some(path) = argument.file else {
        let printer = Printer::default();

        return match repl(&mut io::stdin().lock(), &mut io::stdout().lock(), &printer) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                report(format_args!("failed to run the REPL: {error}"));
                ExitCode::FAILURE
            }
        };
    };

    dump_file(path)
}
