mod cli;
mod compilation;

use std::process::ExitCode;

use clap::Parser as _;
use creek_session::diagnostics::PrettyDiagnosticEmitter;
use creek_session::{ErrorsEmitted, Session};

use crate::cli::Cli;

#[derive(thiserror::Error, Debug)]
enum CompilerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("errors while compiling")]
    HadErrors,
}

impl From<ErrorsEmitted> for CompilerError {
    fn from(_: ErrorsEmitted) -> Self {
        Self::HadErrors
    }
}

type CompilerResult<T> = Result<T, CompilerError>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // compilation errors have already been rendered as diagnostics
            if !matches!(err, CompilerError::HadErrors) {
                eprintln!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> CompilerResult<()> {
    let cli = Cli::parse();

    let mut session = Session::new(PrettyDiagnosticEmitter::default());
    let asm = compilation::compile(&mut session, "<expression>", &cli.expression)?;

    match cli.output {
        Some(path) => std::fs::write(path, asm)?,
        None => print!("{asm}"),
    }

    Ok(())
}
