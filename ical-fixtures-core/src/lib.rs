//! Core of the ical-fixtures generator.
//!
//! This crate holds everything the `make-ical-calendar` binary needs:
//! - `fixtures`: the fixed table of sample event descriptors
//! - `builder`: turns descriptors into dated events and assembles the calendar
//! - `ics`: encodes the calendar as an .ics document
//! - `output`: validates the output path and writes the file

pub mod builder;
pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod fixtures;
pub mod ics;
pub mod output;

pub use builder::{assemble_calendar, build_calendar, build_event, resolve_window};
pub use clock::{LocalZone, RunClock};
pub use config::FixtureConfig;
pub use error::{FixtureError, FixtureResult};
pub use event::*;
pub use fixtures::{DayWindow, EventDescriptor, TimeOfDay, sample_events};
