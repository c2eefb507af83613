use clap::Parser;
use cursor_rules::cli::{Cli, Commands};
use cursor_rules::config::Config;
use cursor_rules::{commands, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(config.log_level.as_deref());

    match cli.command {
        Commands::Init => commands::init::run(&config).await,
        Commands::Update => commands::update::run(&config).await,
        Commands::ReplaceAll => commands::replace_all::run(&config).await,
        Commands::Status => commands::status::run(&config).await,
    }
}
