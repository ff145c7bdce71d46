//! Command handlers for the Wayfarer CLI
//!
//! This module provides command handlers invoked by the CLI entrypoint.
//!
//! It exposes three top-level command modules:
//!
//! - `chat` — Interactive planning chat
//! - `plan` — One-shot trip planning
//! - `last` — Show the stored preference record

use crate::client::GeminiClient;
use crate::config::Config;
use crate::controller::ChatController;
use crate::error::Result;
use crate::mock::MockItineraryGenerator;
use crate::notify::TerminalNotifier;
use crate::store::PreferenceStore;

pub mod chat;
pub mod last;
pub mod plan;

/// Build a fully wired controller from configuration
///
/// Commands compose the controller here so the collaborators are created
/// in exactly one place: the live client from `config.api`, the fallback
/// generator, the preference store (honoring `WAYFARER_PREFS_DB`), and a
/// terminal notifier.
pub(crate) fn build_controller(config: &Config) -> Result<ChatController> {
    let provider = GeminiClient::new(config.api.clone())?;
    let store = PreferenceStore::new()?;

    Ok(ChatController::new(
        Box::new(provider),
        MockItineraryGenerator::new(),
        store,
        Box::new(TerminalNotifier),
        config.planner.min_request_len,
    ))
}
