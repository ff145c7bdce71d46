//! Shared helpers for integration tests

use std::sync::{Arc, Mutex};

use wayfarer::notify::{Notifier, Severity};

/// Notifier that records every message for later assertions
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    /// Create a notifier and a handle to its recorded messages
    pub fn create() -> (Self, Arc<Mutex<Vec<(Severity, String)>>>) {
        let notifier = Self::default();
        let messages = notifier.messages.clone();
        (notifier, messages)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

/// A minimal valid itinerary body, as the model would return it
pub fn itinerary_json(destination: &str) -> String {
    format!(
        r#"{{
            "destination": "{destination}",
            "duration": "5 days",
            "overview": "A test itinerary for {destination}.",
            "highlights": ["One", "Two"],
            "itinerary": [
                {{
                    "day": 1,
                    "title": "Arrival",
                    "theme": "Getting Oriented",
                    "activities": [
                        {{
                            "time": "Morning",
                            "activity": "Check in",
                            "location": "Hotel",
                            "duration": "1 hour",
                            "cost": "$0",
                            "tips": "Travel light",
                            "difficulty": "Easy"
                        }}
                    ]
                }}
            ],
            "budget": {{
                "accommodation": {{"range": "$100/night", "description": "Hotels"}},
                "total": {{"daily": "$200", "trip": "$1,000"}}
            }}
        }}"#
    )
}
