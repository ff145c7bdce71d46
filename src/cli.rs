//! Command-line interface definition for Wayfarer
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for the interactive chat loop, one-shot planning,
//! and inspecting the stored preference record.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wayfarer - AI trip-planner CLI
///
/// Turn a free-text travel request into a structured, rendered itinerary,
/// with a local sample plan whenever the live planner is unavailable.
#[derive(Parser, Debug, Clone)]
#[command(name = "wayfarer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the preferences database path
    #[arg(long)]
    pub prefs_db: Option<String>,

    /// Override the API key from config/environment
    #[arg(long)]
    pub api_key: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Wayfarer
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the interactive planning chat
    Chat,

    /// Plan a single trip and print or save the rendered itinerary
    Plan {
        /// Free-text trip request, e.g. "5 days in Kyoto, budget-friendly"
        #[arg(short, long)]
        request: String,

        /// Write the rendered HTML to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the itinerary as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Show the most recent stored search
    Last,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_command() {
        let cli = Cli::try_parse_from(["wayfarer", "chat"]).unwrap();
        assert!(matches!(cli.command, Commands::Chat));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_plan_command_with_options() {
        let cli = Cli::try_parse_from([
            "wayfarer",
            "plan",
            "--request",
            "a week in Lisbon",
            "--output",
            "trip.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan {
                request,
                output,
                json,
            } => {
                assert_eq!(request, "a week in Lisbon");
                assert_eq!(output.unwrap(), PathBuf::from("trip.html"));
                assert!(!json);
            }
            other => panic!("expected plan command, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_requires_request() {
        assert!(Cli::try_parse_from(["wayfarer", "plan"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "wayfarer",
            "--verbose",
            "--config",
            "custom.yaml",
            "--prefs-db",
            "/tmp/prefs.db",
            "--api-key",
            "k",
            "last",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config.as_deref(), Some("custom.yaml"));
        assert_eq!(cli.prefs_db.as_deref(), Some("/tmp/prefs.db"));
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }
}
