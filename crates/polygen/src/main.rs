//! Command-line tool for building convex polytopes and exporting them as
//! JSON.

#[macro_use]
extern crate lazy_static;

mod cli;
mod config;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    color_eyre::install()?;

    let config = config::GenConfig::load(args.config.as_deref())?;

    // Initialize logging. `RUST_LOG` overrides the configured filter.
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .parse_default_env()
        .init();

    cli::exec(args.subcommand, &config)
}
