use clap::Parser;
use std::io;
use std::process;
use topsort::cli::Cli;
use topsort::cli_handlers;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    if let Err(e) = cli_handlers::handle_sort(&cli, &mut stdout.lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
