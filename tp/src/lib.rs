//! TourPlan - personalized day itineraries
//!
//! Remembers each visitor's travel preferences and turns them into a
//! four-part plan for the day.
//!
//! # Modules
//!
//! - [`itinerary`] - time-range parsing and document composition (pure)
//! - [`session`] - field gating, greeting, save-then-generate flow
//! - [`chat`] - interactive question-and-answer front-end
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//!
//! Preferences are persisted through the [`prefstore`] crate.
//!
//! # Example
//!
//! ```ignore
//! use prefstore::{PreferenceRecord, SqlitePreferenceStore};
//! use tourplan::session::Planner;
//!
//! let planner = Planner::new(SqlitePreferenceStore::open("preferences.db")?)?;
//! println!("{}", planner.greet("u1")?);
//! let doc = planner.plan(&PreferenceRecord::new("u1", "Paris", "10am - 4pm", "$100", "food", "Hotel Lumen"))?;
//! println!("{doc}");
//! ```

pub mod chat;
pub mod cli;
pub mod config;
pub mod itinerary;
pub mod session;

pub use config::Config;
pub use itinerary::{ItineraryDocument, Section, TimeRange, WindowSource, generate};
pub use session::{Greeting, Planner, SessionError};
