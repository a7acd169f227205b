//! Itinerary composition
//!
//! A pure function from five visitor-supplied strings to an [`ItineraryDocument`].
//! Nothing here performs I/O or reads the clock, so identical inputs always
//! render to identical text.
//!
//! The budget is restated in the header only. Section prose is chosen from
//! fixed templates and does not branch on budget or interests.

mod document;
mod time_range;

pub use document::{ItineraryDocument, Section, SectionText, capitalize_first};
pub use time_range::{DEFAULT_END, DEFAULT_START, TimeRange, WindowSource};

use tracing::debug;

/// Build the day plan for the given preferences
pub fn generate(
    city: &str,
    available_time: &str,
    budget: &str,
    interests: &str,
    starting_point: &str,
) -> ItineraryDocument {
    let time_range = TimeRange::parse(available_time);
    debug!(city, start = %time_range.start, end = %time_range.end, fallback = time_range.used_default(), "Composing itinerary");
    ItineraryDocument::compose(city, time_range, budget, interests, starting_point)
}

/// Build the day plan from a stored record
pub fn generate_for(record: &prefstore::PreferenceRecord) -> ItineraryDocument {
    generate(
        &record.city,
        &record.available_time,
        &record.budget,
        &record.interests,
        &record.starting_point,
    )
}
