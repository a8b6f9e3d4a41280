use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use prostrat_cli::cli::{Cli, Commands};
use prostrat_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    let output = match cli.command {
        Commands::Parse(args) => {
            let config = config::load_config_from(&config_path)?;
            commands::parse(&args, &config)?
        }
        Commands::Risk(args) => commands::risk(&args)?,
        Commands::Nomogram(args) => {
            let config = config::load_config_from(&config_path)?;
            commands::nomogram(&args, &config)?
        }
        Commands::Config(args) => commands::config(&args, &config_path)?,
    };

    println!("{output}");
    Ok(())
}
