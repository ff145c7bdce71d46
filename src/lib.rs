//! Wayfarer - AI trip-planner CLI library
//!
//! This library provides the core functionality for the Wayfarer trip
//! planner: the generative-API client, the fallback itinerary generator,
//! preference persistence, HTML rendering, and the orchestration between
//! them.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `client`: live itinerary source (one `generateContent` POST per request)
//! - `mock`: schema-complete fallback itinerary generator
//! - `store`: single-slot persistence of the last search
//! - `render`: pure itinerary-to-HTML rendering
//! - `controller`: submit state machine, fallback substitution, notifications
//! - `itinerary`: the shared travel-plan data model
//! - `extract`: fence-stripping and best-effort JSON extraction
//! - `prompts`: outbound prompt construction
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use wayfarer::mock::MockItineraryGenerator;
//! use wayfarer::render::render_document;
//!
//! let plan = MockItineraryGenerator::new().generate("5 days in Kyoto");
//! let html = render_document(&plan);
//! assert!(html.contains("Daily Itinerary"));
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod extract;
pub mod itinerary;
pub mod mock;
pub mod notify;
pub mod prompts;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use client::{GeminiClient, ItineraryProvider};
pub use config::Config;
pub use controller::{ChatController, PlanOutcome, PlanSource};
pub use error::{Result, WayfarerError};
pub use itinerary::Itinerary;
pub use mock::MockItineraryGenerator;
pub use store::{PreferenceRecord, PreferenceStore};
