use std::env;

use anyhow::{anyhow, Context, Result};
use chrono::{Datelike, Utc};
use log::error;

use arvio::artifacts::Artifacts;
use arvio::models::listing::ListingInput;
use arvio::pricing::{evaluate, DEFAULT_MARGIN};
use arvio::{config, logger};

fn main() -> Result<()> {
    logger::setup_logger()?;

    let config = config::read_config();
    let artifacts = Artifacts::load(&config).context("failed to load model artifacts")?;

    let raw = env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: arvio '<listing json>'"))?;

    let listing = ListingInput::from_json(&raw).map_err(|err| {
        error!("rejected listing: {err}");
        anyhow!(err)
    })?;

    let margin = config.margin.unwrap_or(DEFAULT_MARGIN);
    let reference_year = Utc::now().year();

    let result = evaluate(&artifacts, &listing, margin, reference_year).map_err(|err| {
        error!("evaluation failed: {err}");
        anyhow!(err)
    })?;

    // stdout carries exactly one JSON document per run
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}
