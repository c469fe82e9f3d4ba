//! Waypoint: reconstruct a commander's status from the flight journal.
//!
//! The journal is a stream of events. [`status::transition`] folds one event
//! onto an immutable [`model::StatusSnapshot`]; [`history::History`] drives
//! that fold over whole journals read by [`journal`].

pub mod cli;
pub mod config;
pub mod history;
pub mod journal;
pub mod model;
pub mod status;
