//! ICS file generation.
//!
//! This module writes .ics documents according to RFC 5545.

mod generate;

pub use generate::generate_ics;
