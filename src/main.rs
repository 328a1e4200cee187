use anyhow::Result;
use boxcell::cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --log-level takes precedence over RUST_LOG
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level {
        logger.filter_level(level.to_level_filter());
    }
    logger.init();

    log::debug!("Starting boxcell {}", boxcell::VERSION);

    if let Err(e) = boxcell::run(cli) {
        eprintln!("boxcell: error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
