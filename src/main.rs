// src/main.rs

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use mycat::cli::{usage_error, Cli};
use mycat::errors::Error;
use mycat::{run, ConfigBuilder};
use std::io::{self, BufWriter, Write};

fn main() -> Result<()> {
    // Logging goes to stderr and stays quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "mycat=info".parse()?
                } else {
                    "mycat=warn".parse()?
                },
            ),
        )
        .init();

    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Argument Parsing ---
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --version prints to stdout and exits 0.
        Err(e) if e.kind() == ErrorKind::DisplayVersion => e.exit(),
        Err(e) => fail(&usage_error(e)),
    };

    if cli.help {
        eprint!("{}", Cli::help_text());
        std::process::exit(1);
    }

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    log::debug!("Configuration built successfully: {:?}", config);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let result = run(&config, &mut writer);

    // --- Error Handling ---
    if let Err(e) = result {
        // run() already flushed what it could; make sure nothing is still buffered.
        if let Err(flush_err) = writer.flush() {
            log::debug!("Flushing stdout before reporting failed: {}", flush_err);
        }
        fail(&e);
    }

    writer.flush()?;
    Ok(())
}

/// Reports `err` on stderr and terminates with its exit code.
fn fail(err: &Error) -> ! {
    log::debug!("Terminating: {:?}", err);
    eprintln!("mycat: {}", err);
    std::process::exit(err.exit_code());
}
