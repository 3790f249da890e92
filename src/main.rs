use anyhow::Context;
use clap::Parser;
use custom_alert::cli::Cli;
use custom_alert::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        tracing::info!(path = %path.display(), "logging to file");
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(?config, "starting");
    custom_alert::ui::run(&config).context("terminal UI failed")?;
    Ok(())
}
