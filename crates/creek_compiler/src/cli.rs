use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The expression to compile.
    pub expression: String,

    /// The output file. If not specified, prints assembly to stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
