//! Event types fed to the ICS generator.
//!
//! Everything here is built fresh per run and thrown away once the
//! calendar file is written.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Format version written to the VERSION header line.
pub const CALENDAR_VERSION: &str = "2.0";
/// Calendar scale written to the CALSCALE header line.
pub const CALENDAR_SCALE: &str = "GREGORIAN";
/// Product identifier written to the PRODID header line.
pub const PRODUCT_ID: &str = "-//calendar-improved-test//human.experience//";
/// Location shared by every sample event.
pub const EVENT_LOCATION: &str = "Anywhere";
/// Priority shared by every sample event.
pub const EVENT_PRIORITY: u32 = 5;

/// A generated calendar event
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub uid: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: String,
    pub start: EventTime,
    pub end: EventTime,
    /// Creation timestamp (DTSTAMP)
    pub stamp: DateTime<Utc>,
    pub organizer: Participant,
    pub attendees: Vec<Participant>,
    pub priority: u32,
}

/// Role parameter of an organizer or attendee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantRole {
    Chair,
    RequiredParticipant,
}

impl ParticipantRole {
    /// Value of the ROLE parameter (RFC 5545 section 3.2.16)
    pub fn as_ics_str(self) -> &'static str {
        match self {
            ParticipantRole::Chair => "CHAIR",
            ParticipantRole::RequiredParticipant => "REQ-PARTICIPANT",
        }
    }
}

/// An event participant (also used for the organizer)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Email address
    pub email: String,
    /// Display name, written as the CN parameter
    pub name: String,
    pub role: ParticipantRole,
}

impl Participant {
    pub fn new(email: &str, name: &str, role: ParticipantRole) -> Self {
        Participant {
            email: email.to_string(),
            name: name.to_string(),
            role,
        }
    }

    /// The calendar address value, e.g. `mailto:someone@example.com`
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// A local wall-clock date-time and the way its zone is expressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTime {
    /// Datetime with a TZID parameter
    Zoned {
        datetime: NaiveDateTime,
        tzid: String,
    },
    /// Floating datetime (no Z, no TZID), read as local time by clients
    Floating(NaiveDateTime),
}

impl EventTime {
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            EventTime::Zoned { datetime, .. } => *datetime,
            EventTime::Floating(datetime) => *datetime,
        }
    }
}

/// A calendar with its header metadata and events in output order
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCalendar {
    pub version: String,
    pub scale: String,
    pub product_id: String,
    pub events: Vec<CalendarEvent>,
}

impl Default for FixtureCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCalendar {
    pub fn new() -> Self {
        FixtureCalendar {
            version: CALENDAR_VERSION.to_string(),
            scale: CALENDAR_SCALE.to_string(),
            product_id: PRODUCT_ID.to_string(),
            events: Vec::new(),
        }
    }

    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}
