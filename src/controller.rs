//! Trip-planning orchestration
//!
//! [`ChatController`] wires the pieces together: it validates the user's
//! request, drives the live client, substitutes the mock generator on any
//! failure, persists the last successful search, renders the result, and
//! keeps the user informed through the notification channel.
//!
//! The controller is a two-state machine, `Idle -> Submitting -> Idle`.
//! A submission is refused while one is in flight, and the busy flag is
//! cleared on every exit path so the planner can never get stuck.

use crate::client::ItineraryProvider;
use crate::error::Result;
use crate::itinerary::Itinerary;
use crate::mock::MockItineraryGenerator;
use crate::notify::{Notifier, Severity};
use crate::render;
use crate::store::{PreferenceRecord, PreferenceStore};

/// Where a plan came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    /// The live generative API
    Live,
    /// The local fallback generator
    Fallback,
}

/// The result of a successful submission
#[derive(Debug)]
pub struct PlanOutcome {
    /// The structured plan
    pub itinerary: Itinerary,
    /// The rendered HTML document fragment
    pub html: String,
    /// Whether the plan is live or a fallback
    pub source: PlanSource,
}

/// Orchestrates a single trip-planning submission
pub struct ChatController {
    provider: Box<dyn ItineraryProvider>,
    fallback: MockItineraryGenerator,
    store: PreferenceStore,
    notifier: Box<dyn Notifier>,
    min_request_len: usize,
    busy: bool,
}

impl ChatController {
    /// Create a controller from its collaborators
    ///
    /// Everything is passed in explicitly: the live provider, the fallback
    /// generator, the preference store, the notification sink, and the
    /// minimum request length. There are no process-wide singletons.
    pub fn new(
        provider: Box<dyn ItineraryProvider>,
        fallback: MockItineraryGenerator,
        store: PreferenceStore,
        notifier: Box<dyn Notifier>,
        min_request_len: usize,
    ) -> Self {
        Self {
            provider,
            fallback,
            store,
            notifier,
            min_request_len,
            busy: false,
        }
    }

    /// True while a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The stored preference record, if any
    pub fn stored_preferences(&self) -> Result<PreferenceRecord> {
        self.store.load()
    }

    /// Submit a trip request
    ///
    /// Returns `None` when the request is rejected before planning starts
    /// (too short, or a submission is already in flight). Otherwise always
    /// returns an outcome: a live plan when the API call succeeds, a
    /// fallback plan for every failure kind. The user is notified either
    /// way, with a warning distinguishing degraded mode from success.
    pub async fn submit(&mut self, text: &str) -> Option<PlanOutcome> {
        let request = text.trim();

        if self.busy {
            self.notifier
                .notify(Severity::Warning, "Still working on the previous request.");
            return None;
        }

        if request.is_empty() {
            self.notifier
                .notify(Severity::Warning, "Please enter your trip preferences.");
            return None;
        }

        if request.chars().count() < self.min_request_len {
            self.notifier.notify(
                Severity::Warning,
                "Please provide more details about your trip preferences.",
            );
            return None;
        }

        self.busy = true;
        self.notifier
            .notify(Severity::Info, "Working on your itinerary...");

        // No `?` between here and the busy reset: every path below must
        // fall through so the controller returns to Idle.
        let (itinerary, source) = match self.provider.request_itinerary(request).await {
            Ok(itinerary) => {
                if let Err(e) = self.store.save(&PreferenceRecord::for_search(request)) {
                    tracing::warn!("Failed to persist last search: {:#}", e);
                }
                self.notifier
                    .notify(Severity::Success, "Trip plan generated successfully!");
                (itinerary, PlanSource::Live)
            }
            Err(e) => {
                tracing::warn!("Live itinerary request failed, using fallback: {:#}", e);
                let itinerary = self.fallback.generate(request);
                self.notifier.notify(
                    Severity::Warning,
                    "Generated a sample trip plan (planner unavailable).",
                );
                (itinerary, PlanSource::Fallback)
            }
        };

        let html = render::render_document(&itinerary);
        self.busy = false;

        Some(PlanOutcome {
            itinerary,
            html,
            source,
        })
    }
}
