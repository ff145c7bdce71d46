//! Interactive planning chat
//!
//! A readline-based loop: each line is an independent trip request, with a
//! few special commands for help, examples, and the stored last search.
//! Input controls are naturally "disabled" while a request is in flight
//! because the loop does not prompt again until the submission finishes.

use super::build_controller;
use crate::config::Config;
use crate::controller::{ChatController, PlanOutcome, PlanSource};
use crate::error::Result;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Sample requests offered by the `/examples` command
const SAMPLE_PROMPTS: [&str; 4] = [
    "5 days in Kyoto, budget-friendly, love temples",
    "A romantic weekend in Paris",
    "Two weeks of street food and beaches in Southeast Asia",
    "Family trip to London with two kids, museums and parks",
];

/// Start the interactive planning chat
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
pub async fn run_chat(config: Config) -> Result<()> {
    tracing::info!("Starting interactive chat mode");

    let mut controller = build_controller(&config)?;
    let mut rl = DefaultEditor::new()?;

    print_welcome_banner(&controller);

    loop {
        match rl.readline(&chat_prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match trimmed {
                    "exit" | "quit" => break,
                    "/help" => {
                        print_help();
                        continue;
                    }
                    "/examples" => {
                        print_examples();
                        continue;
                    }
                    "/last" => {
                        print_last_search(&controller);
                        continue;
                    }
                    _ => {}
                }

                rl.add_history_entry(trimmed)?;

                if let Some(outcome) = controller.submit(trimmed).await {
                    print_outcome(&outcome);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                tracing::error!("Readline error: {}", e);
                break;
            }
        }
    }

    println!("Safe travels!");
    Ok(())
}

fn chat_prompt() -> String {
    format!("{} ", "[wayfarer] >>".cyan())
}

fn print_welcome_banner(controller: &ChatController) {
    println!("{}", "Wayfarer — AI trip planner".bold());
    println!("Describe your dream trip, or type /help for commands.");

    // Suggest the previous search the way the original app pre-filled
    // its input placeholder.
    match controller.stored_preferences() {
        Ok(record) => {
            if let Some(last) = record.last_search {
                println!("Try: \"{}\" or describe a new trip.", last.italic());
            }
        }
        Err(e) => tracing::warn!("Could not load stored preferences: {:#}", e),
    }
    println!();
}

fn print_help() {
    println!("Commands:");
    println!("  /help      Show this help");
    println!("  /examples  Show sample trip requests");
    println!("  /last      Show your most recent search");
    println!("  exit       Leave the chat (also: quit, Ctrl-D)");
    println!();
    println!("Anything else is treated as a trip request (at least 5 characters).");
}

fn print_examples() {
    println!("Sample requests:");
    for prompt in SAMPLE_PROMPTS {
        println!("  - {}", prompt);
    }
}

fn print_last_search(controller: &ChatController) {
    match controller.stored_preferences() {
        Ok(record) => match record.last_search {
            Some(last) => println!("Last search: {}", last),
            None => println!("No searches stored yet."),
        },
        Err(e) => tracing::warn!("Could not load stored preferences: {:#}", e),
    }
}

/// Print a compact terminal summary of a plan
fn print_outcome(outcome: &PlanOutcome) {
    let plan = &outcome.itinerary;

    let source_tag = match outcome.source {
        PlanSource::Live => "live plan".green(),
        PlanSource::Fallback => "sample plan".yellow(),
    };

    println!();
    println!(
        "{} — {} ({})",
        plan.destination.bold(),
        plan.duration,
        source_tag
    );
    println!("{}", plan.overview);

    if let Some(highlights) = &plan.highlights {
        println!();
        println!("{}", "Highlights".bold());
        for highlight in highlights {
            println!("  - {}", highlight);
        }
    }

    println!();
    println!("{}", "Days".bold());
    for day in &plan.itinerary {
        println!(
            "  Day {}: {} ({} activities)",
            day.day,
            day.title,
            day.activities.len()
        );
    }

    println!();
    println!(
        "{} daily {}, trip {}",
        "Budget:".bold(),
        plan.budget.total.daily,
        plan.budget.total.trip
    );
    println!(
        "Use `wayfarer plan --request \"...\" --output trip.html` to save the full itinerary."
    );
    println!();
}
