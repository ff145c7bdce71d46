//! Prompt construction for the generative API
//!
//! The outbound prompt does two jobs at once: it frames the travel-planning
//! task around the user's request, and it pins down the exact JSON shape the
//! model must return so the response can be deserialized directly into an
//! [`Itinerary`](crate::itinerary::Itinerary).

/// The fixed instruction block appended to every request
///
/// Specifies the full itinerary schema and explicitly forbids markdown
/// fences and extra prose. Models still fence their output occasionally,
/// which is why [`extract`](crate::extract) strips fences defensively.
const SCHEMA_INSTRUCTIONS: &str = r#"IMPORTANT: Respond ONLY with a valid JSON object (no markdown, no backticks, no additional text) in this exact format:

{
    "destination": "Primary destination name",
    "duration": "Trip duration (e.g., '7 days')",
    "overview": "Engaging 2-3 sentence trip overview",
    "highlights": ["Key highlight 1", "Key highlight 2", "Key highlight 3"],
    "itinerary": [
        {
            "day": 1,
            "title": "Descriptive day title",
            "theme": "Day theme (e.g., Arrival & Orientation)",
            "activities": [
                {
                    "time": "Morning/Afternoon/Evening",
                    "activity": "Detailed activity description",
                    "location": "Specific location",
                    "duration": "Time needed",
                    "cost": "Estimated cost range",
                    "tips": "Practical tips or alternatives",
                    "difficulty": "Easy/Moderate/Challenging"
                }
            ]
        }
    ],
    "budget": {
        "accommodation": {"range": "Price range", "description": "Cost breakdown"},
        "meals": {"range": "Price range", "description": "Dining costs"},
        "activities": {"range": "Price range", "description": "Activity costs"},
        "transportation": {"range": "Price range", "description": "Transport costs"},
        "total": {"daily": "Daily estimate", "trip": "Total trip cost"}
    },
    "accommodations": [
        {
            "category": "Luxury/Mid-range/Budget",
            "name": "Specific hotel/accommodation name",
            "location": "Area/neighborhood",
            "price": "Price range per night",
            "amenities": ["Amenity 1", "Amenity 2"],
            "rating": "Star rating or score",
            "description": "Brief description and why recommended"
        }
    ],
    "restaurants": [
        {
            "category": "Fine Dining/Local/Casual/Street Food",
            "name": "Restaurant name",
            "cuisine": "Cuisine type",
            "location": "Area/address",
            "priceRange": "Price range",
            "specialty": "Must-try dish",
            "atmosphere": "Dining atmosphere description"
        }
    ],
    "transportation": {
        "airport": {"options": ["Option 1", "Option 2"], "cost": "Cost range", "tips": "Practical advice"},
        "local": {"primary": "Main transport method", "options": ["Alt 1", "Alt 2"], "cost": "Daily cost"},
        "intercity": {"method": "If applicable", "cost": "Cost", "duration": "Travel time"},
        "tips": ["Transportation tip 1", "Transportation tip 2"]
    },
    "packing": {
        "essentials": ["Essential item 1", "Essential item 2"],
        "clothing": ["Clothing item 1", "Clothing item 2"],
        "electronics": ["Electronic item 1", "Electronic item 2"],
        "documents": ["Document 1", "Document 2"]
    },
    "tips": {
        "cultural": ["Cultural tip 1", "Cultural tip 2"],
        "practical": ["Practical tip 1", "Practical tip 2"],
        "safety": ["Safety tip 1", "Safety tip 2"],
        "money": ["Money tip 1", "Money tip 2"]
    },
    "bestTime": {
        "season": "Recommended season",
        "months": ["Month 1", "Month 2"],
        "reason": "Why this timing is best"
    },
    "weather": {
        "climate": "General climate description",
        "temperature": "Temperature range",
        "rainfall": "Rainfall information",
        "whatToBring": ["Weather-specific item 1", "Weather-specific item 2"]
    },
    "language": {
        "primary": "Primary language",
        "phrases": {
            "hello": "Local greeting",
            "thankyou": "Thank you",
            "excuse_me": "Excuse me",
            "help": "Help"
        }
    },
    "currency": {
        "name": "Currency name",
        "symbol": "Currency symbol",
        "exchangeRate": "Approximate rate",
        "paymentTips": ["Payment tip 1", "Payment tip 2"]
    }
}

Make the response specific, detailed, and actionable. Consider the user's preferences, budget hints, and travel style from their request."#;

/// Build the full prompt for a single trip request
///
/// # Examples
///
/// ```
/// use wayfarer::prompts::itinerary_prompt;
///
/// let prompt = itinerary_prompt("5 days in Kyoto, budget-friendly");
/// assert!(prompt.contains("5 days in Kyoto"));
/// assert!(prompt.contains("Respond ONLY with a valid JSON object"));
/// ```
pub fn itinerary_prompt(request: &str) -> String {
    format!(
        "You are an expert AI travel planner with deep knowledge of global destinations, \
         cultures, and travel logistics. Create a comprehensive, personalized trip itinerary \
         based on this request: \"{}\".\n\n{}",
        request, SCHEMA_INSTRUCTIONS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_user_request() {
        let prompt = itinerary_prompt("two weeks hiking in Patagonia");
        assert!(prompt.contains("\"two weeks hiking in Patagonia\""));
    }

    #[test]
    fn test_prompt_forbids_markdown() {
        let prompt = itinerary_prompt("anywhere");
        assert!(prompt.contains("no markdown"));
        assert!(prompt.contains("no backticks"));
    }

    #[test]
    fn test_prompt_specifies_required_schema_fields() {
        let prompt = itinerary_prompt("anywhere");
        for field in [
            "\"destination\"",
            "\"duration\"",
            "\"overview\"",
            "\"itinerary\"",
            "\"budget\"",
            "\"bestTime\"",
            "\"priceRange\"",
        ] {
            assert!(prompt.contains(field), "prompt should mention {}", field);
        }
    }
}
