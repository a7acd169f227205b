//! Visitor session flow
//!
//! Sits between a front-end and the core: gates blank fields, persists the
//! visitor's answers, and turns them into an itinerary. Front-ends (the CLI
//! commands and the interactive chat) only collect strings and print results.

use prefstore::{PreferenceRecord, PreferenceStore, StoreError};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

use crate::itinerary::{self, ItineraryDocument};

/// Errors surfaced to the front-end
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please fill in all fields: {0} is missing")]
    MissingField(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The questions asked of a visitor, in order, with the field each answer fills
pub const QUESTIONS: [(&str, &str); 5] = [
    ("city", "Which city are you visiting?"),
    ("available time", "How much time do you have for the trip (e.g., 10am - 4pm)?"),
    ("budget", "What is your budget for the day?"),
    ("interests", "What are your interests? (culture, adventure, food, shopping, etc.)"),
    ("starting point", "Where will you start from (hotel, first attraction)?"),
];

/// Opening line for a visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Greeting {
    New,
    Returning { interests: String, city: String },
}

impl Greeting {
    /// Greeting for a visitor whose last saved record (if any) is `record`
    pub fn from_record(record: Option<&PreferenceRecord>) -> Self {
        match record {
            Some(r) => Greeting::Returning {
                interests: r.interests.clone(),
                city: r.city.clone(),
            },
            None => Greeting::New,
        }
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Greeting::New => write!(f, "Hello! Let's plan your trip."),
            Greeting::Returning { interests, city } => {
                write!(f, "Welcome back! Last time, you were interested in {interests} in {city}.")
            }
        }
    }
}

/// Check that every content field has something in it
pub fn validate(request: &PreferenceRecord) -> Result<(), SessionError> {
    let fields = [
        (QUESTIONS[0].0, &request.city),
        (QUESTIONS[1].0, &request.available_time),
        (QUESTIONS[2].0, &request.budget),
        (QUESTIONS[3].0, &request.interests),
        (QUESTIONS[4].0, &request.starting_point),
    ];
    match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
        Some((name, _)) => Err(SessionError::MissingField(name)),
        None => Ok(()),
    }
}

/// Drives one visitor interaction against a preference store
pub struct Planner<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> Planner<S> {
    /// Wrap a store, making sure its schema exists
    pub fn new(store: S) -> Result<Self, SessionError> {
        store.ensure_schema()?;
        Ok(Self { store })
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Previously saved preferences, if any
    pub fn recall(&self, user_id: &str) -> Result<Option<PreferenceRecord>, SessionError> {
        Ok(self.store.load(user_id)?)
    }

    /// Greeting based on what was stored last time
    pub fn greet(&self, user_id: &str) -> Result<Greeting, SessionError> {
        let previous = self.store.load(user_id)?;
        debug!(user_id, returning = previous.is_some(), "Greeting visitor");
        Ok(Greeting::from_record(previous.as_ref()))
    }

    /// Validate, persist, then compose the itinerary.
    /// Nothing is written when validation fails.
    pub fn plan(&self, request: &PreferenceRecord) -> Result<ItineraryDocument, SessionError> {
        validate(request)?;
        self.store.save(request)?;
        let document = itinerary::generate_for(request);
        info!(user_id = %request.user_id, fallback = document.used_default_window(), "Planned itinerary");
        Ok(document)
    }
}
