// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wordstat::{Args, run};

fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordstat=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    run(args)
}
