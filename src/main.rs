//! promptlink - install shared prompts and skills into a project

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use promptlink::cli::Cli;
use promptlink::{commands, ui};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "warn,promptlink=debug"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = commands::run(cli) {
        ui::print_error(&e);
        std::process::exit(1);
    }
}
