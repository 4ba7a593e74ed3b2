use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use simplybook_bookings::{SimplybookClient, SimplybookConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// List confirmed SimplyBook bookings for a date.
#[derive(Parser)]
#[command(name = "simplybook-bookings")]
struct Cli {
    /// Date to query (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the records as a JSON array
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let config = SimplybookConfig::from_env().context("loading SimplyBook configuration")?;
    let client = SimplybookClient::new(config);

    let infos = client
        .get_therapy_booking_info_for_date(date)
        .await
        .with_context(|| format!("fetching bookings for {}", date))?;
    info!(
        %date,
        company = %client.config().company_login,
        count = infos.len(),
        "retrieved booking info"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for booking in &infos {
            println!("{}\t{}\t{}", booking.date, booking.booking_code, booking.client_email);
        }
    }

    Ok(())
}
