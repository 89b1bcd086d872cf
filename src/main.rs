use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use lomuto_qsort::driver;
use lomuto_qsort::io::{LineWriter, TokenReader};

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .try_init();

    let mut input = TokenReader::new(io::stdin().lock());
    let mut output = LineWriter::new(io::stdout().lock());

    match driver::run(&mut input, &mut output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "sort failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
