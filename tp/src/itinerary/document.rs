//! Itinerary document and its fixed section templates

use serde::Serialize;
use std::fmt;

use super::time_range::TimeRange;

/// The narrative slots of a day, in the order they are always rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Morning,
    LateMorningToLunch,
    Afternoon,
    LateAfternoonToEvening,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Morning,
        Section::LateMorningToLunch,
        Section::Afternoon,
        Section::LateAfternoonToEvening,
    ];

    /// Heading shown before the section's prose
    pub fn title(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::LateMorningToLunch => "Late Morning to Lunch",
            Self::Afternoon => "Afternoon",
            Self::LateAfternoonToEvening => "Late Afternoon to Evening",
        }
    }

    fn render(self, city: &str, start: &str, interests: &str, starting_point: &str) -> String {
        match self {
            Self::Morning => format!(
                "Start your day at {starting_point} around {start}. Since you're interested in {interests}, \
                 begin with a quick exploration of nearby sites or a local attraction in {city}."
            ),
            Self::LateMorningToLunch => format!(
                "Head towards a popular {interests} spot. If you're into food, try a well-reviewed local cafe. \
                 For culture, a museum or historical site would be ideal."
            ),
            Self::Afternoon => format!("Visit a must-see attraction in {city} aligned with your interests."),
            Self::LateAfternoonToEvening => "As you wrap up, consider a final stop at a scenic area or shopping \
                 district before heading back."
                .to_string(),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One rendered slot of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionText {
    pub section: Section,
    pub text: String,
}

/// A display-ready day plan.
///
/// Header fields hold the values as shown to the visitor: `interests` and
/// `starting_point` are already capitalised. Section prose uses the raw inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItineraryDocument {
    pub city: String,
    pub time_range: TimeRange,
    pub budget: String,
    pub interests: String,
    pub starting_point: String,
    sections: Vec<SectionText>,
}

impl ItineraryDocument {
    pub(crate) fn compose(
        city: &str,
        time_range: TimeRange,
        budget: &str,
        interests: &str,
        starting_point: &str,
    ) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| SectionText {
                section,
                text: section.render(city, &time_range.start, interests, starting_point),
            })
            .collect();

        Self {
            city: city.to_string(),
            budget: budget.to_string(),
            interests: capitalize_first(interests),
            starting_point: capitalize_first(starting_point),
            time_range,
            sections,
        }
    }

    /// Sections in rendering order
    pub fn sections(&self) -> &[SectionText] {
        &self.sections
    }

    /// Prose for one section
    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.text.as_str())
    }

    /// True when the visitor's time window was replaced by the default one
    pub fn used_default_window(&self) -> bool {
        self.time_range.used_default()
    }
}

impl fmt::Display for ItineraryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "City: {}", self.city)?;
        writeln!(f, "Available Time: {}", self.time_range)?;
        writeln!(f, "Budget: {}", self.budget)?;
        writeln!(f, "Interests: {}", self.interests)?;
        writeln!(f, "Starting Point: {}", self.starting_point)?;
        writeln!(f)?;
        writeln!(f, "Suggested Itinerary:")?;
        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}: {}", section.section, section.text)?;
        }
        Ok(())
    }
}

/// Upper-case the first character and leave the rest alone
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
