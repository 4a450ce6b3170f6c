use clap::Parser;
use todos::cli::commands::Cli;
use todos::cli::handlers;
use tracing_subscriber::EnvFilter;

fn main() {
    // Silent unless RUST_LOG asks for more; storage failures surface here
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
