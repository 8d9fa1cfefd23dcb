use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use salescomp_cli::{Cli, execute};

fn main() -> ExitCode {
    let cli = Cli::parse();
    salescomp_observability::init(&cli.observability());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(&cli, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "salescomp failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
