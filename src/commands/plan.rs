//! One-shot trip planning
//!
//! Submits a single request through the same controller the chat uses and
//! writes the rendered result to stdout or a file.

use super::build_controller;
use crate::config::Config;
use crate::error::Result;

use anyhow::bail;
use std::path::PathBuf;

/// Plan one trip and emit the rendered itinerary
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `request` - Free-text trip request
/// * `output` - Optional file to write the HTML to; stdout otherwise
/// * `json` - Emit the structured itinerary as JSON instead of HTML
pub async fn run_plan(
    config: Config,
    request: String,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut controller = build_controller(&config)?;

    let Some(outcome) = controller.submit(&request).await else {
        // The controller already told the user why.
        bail!("trip request was rejected");
    };

    let document = if json {
        serde_json::to_string_pretty(&outcome.itinerary)?
    } else {
        outcome.html
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &document)?;
            println!("Wrote itinerary to {}", path.display());
        }
        None => println!("{}", document),
    }

    Ok(())
}
