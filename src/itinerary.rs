//! Itinerary data model
//!
//! The canonical travel-plan schema exchanged between the live API client,
//! the fallback generator, and the renderer. `destination`, `duration`,
//! `overview`, `itinerary`, and `budget` are always present; every other
//! section is optional and rendered only when it arrives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete travel plan for a single trip
///
/// Produced either by deserializing the generative API's response text or
/// by [`MockItineraryGenerator`](crate::mock::MockItineraryGenerator) in
/// fallback mode. Both sources conform to the same shape so the renderer
/// does not care where a plan came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Primary destination name
    pub destination: String,
    /// Trip duration, e.g. "7 days"
    pub duration: String,
    /// Short trip overview
    pub overview: String,
    /// Key trip highlights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    /// Day-by-day plan, ordered by day number
    pub itinerary: Vec<DayPlan>,
    /// Cost breakdown by category plus totals
    pub budget: Budget,
    /// Recommended places to stay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accommodations: Option<Vec<Accommodation>>,
    /// Recommended places to eat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
    /// Getting there and getting around
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transportation: Option<Transportation>,
    /// What to bring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packing: Option<PackingList>,
    /// Insider tips by category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<TravelTips>,
    /// When to go
    #[serde(rename = "bestTime", default, skip_serializing_if = "Option::is_none")]
    pub best_time: Option<BestTime>,
    /// Climate information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<Weather>,
    /// Language primer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageGuide>,
    /// Currency and payment notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyGuide>,
}

/// One day of the itinerary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day number, starting at 1
    pub day: u32,
    /// Descriptive day title
    pub title: String,
    /// Day theme, e.g. "Arrival & Orientation"
    #[serde(default)]
    pub theme: String,
    /// Activities in chronological order
    pub activities: Vec<Activity>,
}

/// A single scheduled activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Time of day, e.g. "Morning"
    pub time: String,
    /// Activity description
    pub activity: String,
    /// Where it happens
    pub location: String,
    /// Time needed
    pub duration: String,
    /// Estimated cost range
    pub cost: String,
    /// Practical tips or alternatives
    #[serde(default)]
    pub tips: String,
    /// Easy / Moderate / Challenging
    #[serde(default)]
    pub difficulty: String,
}

/// Cost breakdown for the trip
///
/// Categories are an open mapping (`accommodation`, `meals`, `activities`,
/// `transportation`, ...) so a plan may carry any set of budget lines; the
/// `total` entry is always present and kept separate from the mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Daily and whole-trip estimates
    pub total: BudgetTotal,
    /// Per-category cost lines
    #[serde(flatten)]
    pub categories: BTreeMap<String, BudgetLine>,
}

/// A single budget category line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Price range for the category
    pub range: String,
    /// What the range covers
    pub description: String,
}

/// Total cost estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTotal {
    /// Estimated daily spend
    pub daily: String,
    /// Estimated whole-trip spend
    pub trip: String,
}

/// A recommended accommodation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accommodation {
    /// Luxury / Mid-range / Budget
    pub category: String,
    pub name: String,
    pub location: String,
    /// Price range per night
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub description: String,
}

/// A recommended restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    /// Fine Dining / Local / Casual / Street Food
    pub category: String,
    pub name: String,
    pub cuisine: String,
    pub location: String,
    #[serde(rename = "priceRange", default)]
    pub price_range: String,
    /// Must-try dish
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub atmosphere: String,
}

/// Transportation options for the trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transportation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airport: Option<AirportTransport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalTransport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intercity: Option<IntercityTransport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

/// Airport transfer options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirportTransport {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub tips: String,
}

/// Local transit options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalTransport {
    /// Main transport method
    pub primary: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Daily cost
    #[serde(default)]
    pub cost: String,
}

/// Intercity travel, when applicable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntercityTransport {
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub cost: String,
    #[serde(default)]
    pub duration: String,
}

/// Packing checklist by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingList {
    #[serde(default)]
    pub essentials: Vec<String>,
    #[serde(default)]
    pub clothing: Vec<String>,
    #[serde(default)]
    pub electronics: Vec<String>,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Insider tips by category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelTips {
    #[serde(default)]
    pub cultural: Vec<String>,
    #[serde(default)]
    pub practical: Vec<String>,
    #[serde(default)]
    pub safety: Vec<String>,
    #[serde(default)]
    pub money: Vec<String>,
}

/// Recommended travel window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestTime {
    pub season: String,
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub reason: String,
}

/// Climate summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    #[serde(default)]
    pub climate: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub rainfall: String,
    #[serde(rename = "whatToBring", default)]
    pub what_to_bring: Vec<String>,
}

/// Language primer with a handful of useful phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageGuide {
    /// Primary language spoken at the destination
    pub primary: String,
    /// Phrase key (e.g. "hello", "excuse_me") to local phrase
    #[serde(default)]
    pub phrases: BTreeMap<String, String>,
}

/// Currency and payment notes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyGuide {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "exchangeRate", default)]
    pub exchange_rate: String,
    #[serde(rename = "paymentTips", default)]
    pub payment_tips: Vec<String>,
}
