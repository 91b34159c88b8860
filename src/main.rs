use anyhow::Result;
use clap::Parser;
use forarprov::cli::{commands, Cli};
use forarprov::client::config::ClientConfig;
use forarprov::client::BookingClient;
use forarprov::log_format;
use log::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    log_format::init(cli.verbose);

    if let Err(err) = run(cli).await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let client = BookingClient::new(ClientConfig::default())?;
    let mut stdout = std::io::stdout().lock();

    commands::run(&cli, &client, &mut stdout).await
}
