use super::{Cli, Command, ListCommand};
use crate::client::BookingClient;
use crate::output::render;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Run the parsed command and print its result to `out`.
///
/// Required flags are checked before anything is sent.
pub async fn run(cli: &Cli, client: &BookingClient, out: &mut dyn Write) -> Result<()> {
    let format = cli.output_format();

    match &cli.command {
        Command::List(ListCommand::LicenceCategories) => {
            let categories = client
                .licence_categories()
                .await
                .context("Fetching licence categories")?;
            render(categories.as_slice(), format, out)
        }
        Command::List(ListCommand::Locations(args)) => {
            let body = args.search_information_request()?;
            let locations = client.locations(&body).await.context("Fetching locations")?;
            render(locations.as_slice(), format, out)
        }
        Command::List(ListCommand::Occasions(args)) => {
            let body = args.occasion_bundles_request()?;
            info!(
                "Searching occasions at location {} from {}",
                body.occasion_bundle_query.location_id, body.occasion_bundle_query.start_date
            );
            let occasions = client.occasions(&body).await.context("Fetching occasions")?;
            render(occasions.as_slice(), format, out)
        }
    }
}
