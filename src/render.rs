//! HTML rendering for itineraries
//!
//! A pure mapping from [`Itinerary`] to an HTML document fragment. The
//! renderer assumes the required fields (`destination`, `duration`,
//! `overview`, `itinerary`, `budget`) are present and guards every
//! optional section: absent sections produce no markup at all.

use crate::itinerary::{Budget, DayPlan, Itinerary};

/// Render an itinerary into an HTML document fragment
///
/// # Examples
///
/// ```
/// use wayfarer::mock::MockItineraryGenerator;
/// use wayfarer::render::render_document;
///
/// let plan = MockItineraryGenerator::with_seed(1).generate("a long weekend");
/// let html = render_document(&plan);
/// assert!(html.contains("trip-plan-container"));
/// assert!(html.contains(&plan.destination));
/// ```
pub fn render_document(plan: &Itinerary) -> String {
    let mut html = String::with_capacity(8 * 1024);

    html.push_str("<div class=\"trip-plan-container\">\n");
    render_header(&mut html, plan);
    render_days(&mut html, &plan.itinerary);
    render_budget(&mut html, &plan.budget);
    render_accommodations(&mut html, plan);
    render_restaurants(&mut html, plan);
    render_tips(&mut html, plan);
    render_practical_info(&mut html, plan);
    html.push_str("</div>\n");

    html
}

/// Escape text for safe interpolation into HTML
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn render_header(html: &mut String, plan: &Itinerary) {
    let season = plan
        .best_time
        .as_ref()
        .map(|b| b.season.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("Year-round");

    html.push_str("<div class=\"trip-header-section\">\n");
    html.push_str("<div class=\"destination-card\">\n");
    html.push_str(&format!(
        "<h2 class=\"destination-name\">{}</h2>\n",
        escape(&plan.destination)
    ));
    html.push_str(&format!(
        "<div class=\"trip-meta\"><span class=\"duration\">{}</span>\
         <span class=\"separator\">&bull;</span>\
         <span class=\"best-time\">{}</span></div>\n",
        escape(&plan.duration),
        escape(season)
    ));
    html.push_str(&format!(
        "<p class=\"trip-overview\">{}</p>\n",
        escape(&plan.overview)
    ));
    html.push_str("</div>\n");

    if let Some(highlights) = &plan.highlights {
        html.push_str("<div class=\"highlights-section\">\n<h3>Trip Highlights</h3>\n");
        html.push_str("<div class=\"highlights-grid\">\n");
        for highlight in highlights {
            html.push_str(&format!(
                "<div class=\"highlight-item\"><span>{}</span></div>\n",
                escape(highlight)
            ));
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n");
}

fn render_days(html: &mut String, days: &[DayPlan]) {
    html.push_str("<div class=\"itinerary-section\">\n<h3>Daily Itinerary</h3>\n");
    html.push_str("<div class=\"itinerary-timeline\">\n");

    for day in days {
        html.push_str("<div class=\"day-card\">\n<div class=\"day-header\">\n");
        html.push_str(&format!(
            "<div class=\"day-number\">Day {}</div>\n",
            day.day
        ));
        html.push_str("<div class=\"day-info\">\n");
        html.push_str(&format!("<h4>{}</h4>\n", escape(&day.title)));
        if !day.theme.is_empty() {
            html.push_str(&format!(
                "<span class=\"day-theme\">{}</span>\n",
                escape(&day.theme)
            ));
        }
        html.push_str("</div>\n</div>\n");

        html.push_str("<div class=\"activities-list\">\n");
        for activity in &day.activities {
            html.push_str("<div class=\"activity-item\">\n");
            html.push_str(&format!(
                "<div class=\"activity-time\">{}</div>\n",
                escape(&activity.time)
            ));
            html.push_str("<div class=\"activity-content\">\n");
            html.push_str(&format!("<h5>{}</h5>\n", escape(&activity.activity)));
            html.push_str(&format!(
                "<div class=\"activity-details\">\
                 <span class=\"location\">{}</span>\
                 <span class=\"duration\">{}</span>\
                 <span class=\"cost\">{}</span></div>\n",
                escape(&activity.location),
                escape(&activity.duration),
                escape(&activity.cost)
            ));
            if !activity.tips.is_empty() {
                html.push_str(&format!(
                    "<p class=\"activity-tips\">{}</p>\n",
                    escape(&activity.tips)
                ));
            }
            html.push_str("</div>\n</div>\n");
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n</div>\n");
}

fn render_budget(html: &mut String, budget: &Budget) {
    html.push_str("<div class=\"budget-section\">\n<h3>Budget Breakdown</h3>\n");
    html.push_str("<div class=\"budget-grid\">\n");

    for (category, line) in &budget.categories {
        html.push_str("<div class=\"budget-item\">\n<div class=\"budget-info\">\n");
        html.push_str(&format!("<h4>{}</h4>\n", escape(&title_case(category))));
        html.push_str(&format!(
            "<span class=\"budget-amount\">{}</span>\n",
            escape(&line.range)
        ));
        html.push_str(&format!("<p>{}</p>\n", escape(&line.description)));
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"budget-total\">\n<h4>Total Estimated Cost</h4>\n\
         <div class=\"total-amounts\">\
         <span class=\"daily-total\">Daily: {}</span>\
         <span class=\"trip-total\">Trip: {}</span></div>\n</div>\n",
        escape(&budget.total.daily),
        escape(&budget.total.trip)
    ));
    html.push_str("</div>\n");
}

fn render_accommodations(html: &mut String, plan: &Itinerary) {
    let Some(accommodations) = &plan.accommodations else {
        return;
    };

    html.push_str(
        "<div class=\"accommodations-section\">\n<h3>Recommended Accommodations</h3>\n",
    );
    html.push_str("<div class=\"accommodations-grid\">\n");
    for hotel in accommodations {
        html.push_str("<div class=\"accommodation-card\">\n");
        html.push_str(&format!(
            "<div class=\"accommodation-header\"><h4>{}</h4>\
             <span class=\"category-badge\">{}</span></div>\n",
            escape(&hotel.name),
            escape(&hotel.category)
        ));
        html.push_str(&format!(
            "<div class=\"accommodation-details\">\
             <p class=\"location\">{}</p>\
             <p class=\"price\">{}</p>\
             <p class=\"rating\">{}</p></div>\n",
            escape(&hotel.location),
            escape(&hotel.price),
            escape(&hotel.rating)
        ));
        html.push_str(&format!(
            "<p class=\"description\">{}</p>\n",
            escape(&hotel.description)
        ));
        if let Some(amenities) = &hotel.amenities {
            html.push_str("<div class=\"amenities\">");
            for amenity in amenities {
                html.push_str(&format!(
                    "<span class=\"amenity-tag\">{}</span>",
                    escape(amenity)
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
}

fn render_restaurants(html: &mut String, plan: &Itinerary) {
    let Some(restaurants) = &plan.restaurants else {
        return;
    };

    html.push_str("<div class=\"restaurants-section\">\n<h3>Must-Try Restaurants</h3>\n");
    html.push_str("<div class=\"restaurants-grid\">\n");
    for restaurant in restaurants {
        html.push_str("<div class=\"restaurant-card\">\n");
        html.push_str(&format!(
            "<div class=\"restaurant-header\"><h4>{}</h4>\
             <span class=\"category-badge\">{}</span></div>\n",
            escape(&restaurant.name),
            escape(&restaurant.category)
        ));
        html.push_str(&format!(
            "<div class=\"restaurant-details\">\
             <p>{}</p><p>{}</p><p>{}</p></div>\n",
            escape(&restaurant.cuisine),
            escape(&restaurant.location),
            escape(&restaurant.price_range)
        ));
        html.push_str(&format!(
            "<p><strong>Must-try:</strong> {}</p>\n",
            escape(&restaurant.specialty)
        ));
        html.push_str(&format!(
            "<p class=\"atmosphere\">{}</p>\n",
            escape(&restaurant.atmosphere)
        ));
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</div>\n");
}

fn render_tips(html: &mut String, plan: &Itinerary) {
    let Some(tips) = &plan.tips else {
        return;
    };

    html.push_str("<div class=\"tips-section\">\n<h3>Insider Tips</h3>\n");
    html.push_str("<div class=\"tips-grid\">\n");
    for (label, entries) in [
        ("Cultural Tips", &tips.cultural),
        ("Practical Tips", &tips.practical),
        ("Safety Tips", &tips.safety),
        ("Money Tips", &tips.money),
    ] {
        if entries.is_empty() {
            continue;
        }
        html.push_str(&format!(
            "<div class=\"tips-category\">\n<h4>{}</h4>\n<ul>\n",
            label
        ));
        for tip in entries {
            html.push_str(&format!("<li>{}</li>\n", escape(tip)));
        }
        html.push_str("</ul>\n</div>\n");
    }
    html.push_str("</div>\n</div>\n");
}

fn render_practical_info(html: &mut String, plan: &Itinerary) {
    if plan.weather.is_none() && plan.currency.is_none() && plan.language.is_none() {
        return;
    }

    html.push_str("<div class=\"practical-info-section\">\n<h3>Practical Information</h3>\n");
    html.push_str("<div class=\"practical-grid\">\n");

    if let Some(weather) = &plan.weather {
        html.push_str("<div class=\"info-card\">\n<h4>Weather</h4>\n");
        html.push_str(&format!(
            "<p><strong>Climate:</strong> {}</p>\n",
            escape(&weather.climate)
        ));
        html.push_str(&format!(
            "<p><strong>Temperature:</strong> {}</p>\n",
            escape(&weather.temperature)
        ));
        html.push_str(&format!(
            "<p><strong>Rainfall:</strong> {}</p>\n",
            escape(&weather.rainfall)
        ));
        html.push_str("</div>\n");
    }

    if let Some(currency) = &plan.currency {
        html.push_str("<div class=\"info-card\">\n<h4>Currency</h4>\n");
        html.push_str(&format!(
            "<p><strong>Currency:</strong> {} ({})</p>\n",
            escape(&currency.name),
            escape(&currency.symbol)
        ));
        html.push_str(&format!(
            "<p><strong>Exchange Rate:</strong> {}</p>\n",
            escape(&currency.exchange_rate)
        ));
        html.push_str("</div>\n");
    }

    if let Some(language) = &plan.language {
        html.push_str("<div class=\"info-card\">\n<h4>Language</h4>\n");
        html.push_str(&format!(
            "<p><strong>Primary:</strong> {}</p>\n",
            escape(&language.primary)
        ));
        html.push_str("<div class=\"phrases\">");
        for (key, phrase) in &language.phrases {
            html.push_str(&format!(
                "<span class=\"phrase\"><strong>{}:</strong> {}</span>",
                escape(&key.replace('_', " ")),
                escape(phrase)
            ));
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n</div>\n");
}

/// Uppercase the first character of a budget category name
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockItineraryGenerator;

    fn full_plan() -> Itinerary {
        MockItineraryGenerator::with_seed(11).generate("sample request")
    }

    fn minimal_plan() -> Itinerary {
        let mut plan = full_plan();
        plan.highlights = None;
        plan.accommodations = None;
        plan.restaurants = None;
        plan.transportation = None;
        plan.packing = None;
        plan.tips = None;
        plan.best_time = None;
        plan.weather = None;
        plan.language = None;
        plan.currency = None;
        plan
    }

    #[test]
    fn test_required_sections_always_render() {
        let html = render_document(&minimal_plan());
        assert!(html.contains("destination-name"));
        assert!(html.contains("itinerary-section"));
        assert!(html.contains("budget-section"));
        assert!(html.contains("Total Estimated Cost"));
    }

    #[test]
    fn test_absent_optional_sections_render_nothing() {
        let html = render_document(&minimal_plan());
        assert!(!html.contains("highlights-section"));
        assert!(!html.contains("accommodations-section"));
        assert!(!html.contains("restaurants-section"));
        assert!(!html.contains("tips-section"));
        assert!(!html.contains("practical-info-section"));
    }

    #[test]
    fn test_missing_best_time_falls_back_to_year_round() {
        let html = render_document(&minimal_plan());
        assert!(html.contains("Year-round"));
    }

    #[test]
    fn test_full_plan_renders_every_section() {
        let html = render_document(&full_plan());
        for class in [
            "highlights-section",
            "itinerary-section",
            "budget-section",
            "accommodations-section",
            "restaurants-section",
            "tips-section",
            "practical-info-section",
        ] {
            assert!(html.contains(class), "missing section {}", class);
        }
    }

    #[test]
    fn test_day_and_activity_content_present() {
        let html = render_document(&full_plan());
        assert!(html.contains("Day 1"));
        assert!(html.contains("Day 2"));
        assert!(html.contains("Walking tour of historic district"));
    }

    #[test]
    fn test_budget_categories_render_with_title_case() {
        let html = render_document(&full_plan());
        assert!(html.contains("<h4>Accommodation</h4>"));
        assert!(html.contains("<h4>Transportation</h4>"));
    }

    #[test]
    fn test_empty_activity_tips_render_no_paragraph() {
        let mut plan = minimal_plan();
        plan.itinerary[0].activities[0].tips = String::new();
        let html = render_document(&plan);
        // Day 1's first activity has no tips paragraph; Day 1 activity 2
        // and Day 2 still have theirs.
        let count = html.matches("activity-tips").count();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_html_special_characters_are_escaped() {
        let mut plan = minimal_plan();
        plan.destination = "Paris <script>alert(1)</script>".to_string();
        plan.overview = "Ampersand & \"quotes\"".to_string();
        let html = render_document(&plan);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Ampersand &amp; &quot;quotes&quot;"));
    }

    #[test]
    fn test_phrase_keys_replace_underscores() {
        let html = render_document(&full_plan());
        assert!(html.contains("excuse me"));
        assert!(!html.contains("excuse_me"));
    }

    #[test]
    fn test_empty_theme_renders_no_badge() {
        let mut plan = minimal_plan();
        for day in &mut plan.itinerary {
            day.theme = String::new();
        }
        let html = render_document(&plan);
        assert!(!html.contains("day-theme"));
    }
}
