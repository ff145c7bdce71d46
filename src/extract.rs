//! Best-effort structured extraction from the model's text channel
//!
//! The generative API is asked for bare JSON, but models routinely wrap
//! their output in markdown code fences anyway. This module isolates the
//! "clean fences, then parse" step behind two small functions so the
//! brittle text contract lives in exactly one place.

use crate::error::WayfarerError;
use crate::itinerary::Itinerary;

/// Strip leading/trailing markdown code-fence markers from `text`
///
/// Handles the variants models actually produce: no fence at all, a bare
/// ```` ``` ```` fence, a language-tagged ```` ```json ```` fence, and any
/// combination of surrounding whitespace or trailing newlines. Fence
/// markers in the middle of the text are left untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    body.trim().trim_end_matches("```").trim()
}

/// Parse the model's candidate text as an [`Itinerary`]
///
/// Strips code fences first, then deserializes. On failure the raw
/// (unstripped) text is carried in [`WayfarerError::MalformedResponse`]
/// for diagnostics.
pub fn parse_itinerary(text: &str) -> Result<Itinerary, WayfarerError> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(cleaned).map_err(|e| {
        tracing::warn!("Candidate text is not a valid itinerary: {}", e);
        WayfarerError::MalformedResponse {
            raw: text.to_string(),
        }
    })
}
