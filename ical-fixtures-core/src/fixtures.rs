//! The fixed sample data written to every generated calendar.

use crate::event::{Participant, ParticipantRole};

/// Hour and minute of a local time; seconds are always zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub const fn new(hour: u32, minute: u32) -> Self {
        TimeOfDay { hour, minute }
    }
}

/// Which part of the calendar an event occupies, relative to the run date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayWindow {
    /// Between two times on today's date
    Today { start: TimeOfDay, end: TimeOfDay },
    /// Today 00:00 until tomorrow 00:00
    AllDay,
}

/// One row of the sample table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDescriptor {
    pub title: String,
    pub description: Option<String>,
    pub window: DayWindow,
}

impl EventDescriptor {
    fn new(title: &str, description: &str, window: DayWindow) -> Self {
        EventDescriptor {
            title: title.to_string(),
            description: Some(description.to_string()),
            window,
        }
    }
}

fn today(start: (u32, u32), end: (u32, u32)) -> DayWindow {
    DayWindow::Today {
        start: TimeOfDay::new(start.0, start.1),
        end: TimeOfDay::new(end.0, end.1),
    }
}

/// The sample events in output order.
///
/// With `include_descriptions == false` every descriptor has its
/// description removed, so the generated events carry no DESCRIPTION.
pub fn sample_events(include_descriptions: bool) -> Vec<EventDescriptor> {
    let mut events = vec![
        EventDescriptor::new(
            "Event: All day today",
            "Covers the whole of today from midnight to midnight",
            DayWindow::AllDay,
        ),
        EventDescriptor::new(
            "Event: 12am - 4am",
            "First block of the day starting at midnight",
            today((0, 0), (4, 0)),
        ),
        EventDescriptor::new(
            "Event: 04am - 08am",
            "Early morning block",
            today((4, 0), (8, 0)),
        ),
        EventDescriptor::new(
            "Event: 08am - 12pm",
            "Morning block ending at noon",
            today((8, 0), (12, 0)),
        ),
        EventDescriptor::new(
            "Event: 12pm - 04pm",
            "Afternoon block starting at noon",
            today((12, 0), (16, 0)),
        ),
        EventDescriptor::new(
            "Event: 04pm - 08pm",
            "Evening block",
            today((16, 0), (20, 0)),
        ),
        EventDescriptor::new(
            "Event: 08pm - 12am",
            "Last block of the day ending one minute before midnight",
            today((20, 0), (23, 59)),
        ),
    ];

    if !include_descriptions {
        for event in &mut events {
            event.description = None;
        }
    }

    events
}

/// Organizer shared by every sample event
pub fn organizer() -> Participant {
    Participant::new("organizer@example.com", "Orga Nizer", ParticipantRole::Chair)
}

/// Attendees shared by every sample event, in output order
pub fn attendees() -> Vec<Participant> {
    vec![
        Participant::new(
            "participant1@example.com",
            "Par Ticip, Ant",
            ParticipantRole::RequiredParticipant,
        ),
        Participant::new(
            "participant2@example.com",
            "Parti, Cipant",
            ParticipantRole::RequiredParticipant,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_events_order_and_count() {
        let events = sample_events(true);
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Event: All day today",
                "Event: 12am - 4am",
                "Event: 04am - 08am",
                "Event: 08am - 12pm",
                "Event: 12pm - 04pm",
                "Event: 04pm - 08pm",
                "Event: 08pm - 12am",
            ]
        );
        assert_eq!(events[0].window, DayWindow::AllDay);
    }

    #[test]
    fn test_descriptions_toggle() {
        assert!(sample_events(true).iter().all(|e| e.description.is_some()));
        assert!(sample_events(false).iter().all(|e| e.description.is_none()));
    }

    #[test]
    fn test_fixed_participants_roles() {
        assert_eq!(organizer().role, ParticipantRole::Chair);
        let attendees = attendees();
        assert_eq!(attendees.len(), 2);
        assert!(
            attendees
                .iter()
                .all(|a| a.role == ParticipantRole::RequiredParticipant)
        );
        assert_eq!(attendees[0].email, "participant1@example.com");
        assert_eq!(attendees[1].email, "participant2@example.com");
    }
}
