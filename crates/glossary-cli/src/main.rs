use std::io;

use anyhow::Context;
use clap::Parser;

use glossary_cli::{Cli, logging, run};

fn main() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(logging::subscriber(logging::env_filter()))
        .context("install tracing subscriber")?;

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli, &mut stdout.lock())
}
