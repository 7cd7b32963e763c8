//! Headless driver for the transfer-out pipeline.
//!
//! Wires configuration from the environment, activates the screen against a
//! live backend, applies the operator fields given on the command line, and
//! performs one submission (or prints the payload with `--dry-run`).

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveTime, TimeZone};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transferout_client::RestClient;
use transferout_core::{
    assemble_encounter, build_observations, concepts::answers, EncounterConfig, FieldKey,
    FieldValue,
};
use transferout_screen::ScreenController;

/// Record a patient transfer-out encounter.
#[derive(Parser)]
#[command(name = "transferout")]
struct Cli {
    /// Backend REST base URL, e.g. https://emr.example.org/ws/rest/v1
    /// (falls back to TRANSFEROUT_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Patient uuid the transfer-out is recorded for
    #[arg(long)]
    patient: String,

    /// Name of the receiving facility
    #[arg(long)]
    transferred_to: Option<String>,

    /// ART started answer: "yes", "no", or an answer concept uuid
    #[arg(long)]
    art_started: Option<String>,

    /// Original first-line regimen dose answer concept uuid
    #[arg(long)]
    regimen_dose: Option<String>,

    /// Date of transfer as YYYY-MM-DD, read in the local timezone
    #[arg(long)]
    date_of_transfer: Option<String>,

    /// Print the encounter payload instead of submitting it
    #[arg(long)]
    dry_run: bool,
}

fn required_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("transferout=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url = match cli.base_url {
        Some(url) => url,
        None => required_env("TRANSFEROUT_BASE_URL")?,
    };
    let encounter_type_uuid = required_env("TRANSFEROUT_ENCOUNTER_TYPE_UUID")?;
    let form_uuid = required_env("TRANSFEROUT_FORM_UUID")?;

    let config = match (
        std::env::var("TRANSFEROUT_PROVIDER_UUID").ok(),
        std::env::var("TRANSFEROUT_PROVIDER_ROLE_UUID").ok(),
    ) {
        (Some(provider), Some(role)) => {
            EncounterConfig::new(encounter_type_uuid, form_uuid, provider, role)?
        }
        _ => EncounterConfig::with_default_providers(encounter_type_uuid, form_uuid)?,
    };

    let client = RestClient::new(base_url)?;
    let mut screen = ScreenController::new(client, config, &cli.patient);

    tracing::info!(patient = %cli.patient, "loading screen context");
    screen.activate().await;

    match screen.facility() {
        Some(facility) => tracing::info!(facility = %facility.display, "context loaded"),
        None => tracing::warn!("no operating facility resolved; location will be blank"),
    }

    if let Some(value) = cli.transferred_to {
        screen.set_field(FieldKey::TransferredTo, FieldValue::Text(value));
    }
    if let Some(value) = cli.art_started {
        let code = match value.as_str() {
            "yes" => answers::ART_STARTED_YES.to_string(),
            "no" => answers::ART_STARTED_NO.to_string(),
            other => other.to_string(),
        };
        screen.set_field(FieldKey::ArtStarted, FieldValue::Code(code));
    }
    if let Some(value) = cli.regimen_dose {
        screen.set_field(FieldKey::OriginalFirstLineRegimenDose, FieldValue::Code(value));
    }
    if let Some(value) = cli.date_of_transfer {
        let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .context("date_of_transfer must be YYYY-MM-DD")?;
        let start_date = Local
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .single()
            .context("could not resolve local midnight for date_of_transfer")?
            .fixed_offset();
        screen.set_field(
            FieldKey::DateOfTransfer,
            FieldValue::DateSelection {
                start_date,
                end_date: None,
            },
        );
    }

    if cli.dry_run {
        let payload = assemble_encounter(
            screen.config(),
            screen.encounter_instant(),
            screen.facility().map(|f| f.uuid.as_str()),
            screen.patient_uuid(),
            build_observations(screen.snapshot()),
        );
        println!("{}", payload.to_json()?);
        return Ok(());
    }

    screen.submit().await?;
    tracing::info!("encounter submitted");

    Ok(())
}
