//! Turns sample descriptors into dated events and collects them into a calendar.

use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::clock::RunClock;
use crate::error::{FixtureError, FixtureResult};
use crate::event::{CalendarEvent, EVENT_LOCATION, EVENT_PRIORITY, FixtureCalendar};
use crate::fixtures::{self, DayWindow, EventDescriptor, TimeOfDay};

/// Resolve a window to concrete local start/end times on `today`.
///
/// Fails if a time of day is out of range or if start is not strictly
/// before end.
pub fn resolve_window(
    window: &DayWindow,
    today: NaiveDate,
) -> FixtureResult<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = match window {
        DayWindow::Today { start, end } => (at(today, start)?, at(today, end)?),
        DayWindow::AllDay => {
            let tomorrow = today
                .checked_add_days(Days::new(1))
                .ok_or_else(|| FixtureError::InvalidWindow(format!("no day after {today}")))?;
            (
                at(today, &TimeOfDay::new(0, 0))?,
                at(tomorrow, &TimeOfDay::new(0, 0))?,
            )
        }
    };

    if start >= end {
        return Err(FixtureError::InvalidWindow(format!(
            "start {start} is not before end {end}"
        )));
    }

    Ok((start, end))
}

fn at(date: NaiveDate, time: &TimeOfDay) -> FixtureResult<NaiveDateTime> {
    date.and_hms_opt(time.hour, time.minute, 0).ok_or_else(|| {
        FixtureError::InvalidWindow(format!(
            "{:02}:{:02} is not a valid time",
            time.hour, time.minute
        ))
    })
}

/// Build one event from a descriptor.
///
/// Apart from the freshly generated UID, the result depends only on the
/// descriptor and `clock`.
pub fn build_event(
    descriptor: &EventDescriptor,
    clock: &RunClock,
) -> FixtureResult<CalendarEvent> {
    let (start, end) = resolve_window(&descriptor.window, clock.today)?;

    let event = CalendarEvent {
        uid: Uuid::new_v4().to_string(),
        summary: descriptor.title.clone(),
        description: descriptor.description.clone(),
        location: EVENT_LOCATION.to_string(),
        start: clock.zone.event_time(start),
        end: clock.zone.event_time(end),
        stamp: clock.utc,
        organizer: fixtures::organizer(),
        attendees: fixtures::attendees(),
        priority: EVENT_PRIORITY,
    };

    debug!(uid = %event.uid, summary = %event.summary, %start, %end, "built event");

    Ok(event)
}

/// Collect events into a calendar, keeping their order.
pub fn assemble_calendar(events: impl IntoIterator<Item = CalendarEvent>) -> FixtureCalendar {
    let mut calendar = FixtureCalendar::new();
    for event in events {
        calendar.push(event);
    }
    calendar
}

/// Build every descriptor and assemble the result.
pub fn build_calendar(
    descriptors: &[EventDescriptor],
    clock: &RunClock,
) -> FixtureResult<FixtureCalendar> {
    let events = descriptors
        .iter()
        .map(|descriptor| build_event(descriptor, clock))
        .collect::<FixtureResult<Vec<_>>>()?;

    Ok(assemble_calendar(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::LocalZone;
    use crate::event::{EventTime, ParticipantRole};
    use crate::fixtures::sample_events;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_clock() -> RunClock {
        RunClock {
            today: date(2025, 3, 20),
            utc: Utc.with_ymd_and_hms(2025, 3, 20, 9, 30, 15).unwrap(),
            zone: LocalZone::Named(chrono_tz::Europe::Berlin),
        }
    }

    #[test]
    fn test_resolve_today_window() {
        let window = DayWindow::Today {
            start: TimeOfDay::new(8, 0),
            end: TimeOfDay::new(12, 0),
        };
        let (start, end) = resolve_window(&window, date(2025, 3, 20)).unwrap();
        assert_eq!(start, date(2025, 3, 20).and_hms_opt(8, 0, 0).unwrap());
        assert_eq!(end, date(2025, 3, 20).and_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_all_day_crosses_month_and_year() {
        let (start, end) = resolve_window(&DayWindow::AllDay, date(2024, 12, 31)).unwrap();
        assert_eq!(start, date(2024, 12, 31).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(end, date(2025, 1, 1).and_hms_opt(0, 0, 0).unwrap());

        let (_, end) = resolve_window(&DayWindow::AllDay, date(2024, 2, 28)).unwrap();
        assert_eq!(end.date(), date(2024, 2, 29));
    }

    #[test]
    fn test_resolve_rejects_inverted_window() {
        let window = DayWindow::Today {
            start: TimeOfDay::new(12, 0),
            end: TimeOfDay::new(12, 0),
        };
        assert!(matches!(
            resolve_window(&window, date(2025, 3, 20)),
            Err(FixtureError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_out_of_range_time() {
        let window = DayWindow::Today {
            start: TimeOfDay::new(0, 0),
            end: TimeOfDay::new(24, 0),
        };
        assert!(matches!(
            resolve_window(&window, date(2025, 3, 20)),
            Err(FixtureError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_build_event_copies_descriptor_fields() {
        let clock = test_clock();
        let descriptors = sample_events(true);
        let descriptor = &descriptors[3];
        let event = build_event(descriptor, &clock).unwrap();

        assert_eq!(event.summary, "Event: 08am - 12pm");
        assert_eq!(event.description, descriptor.description);
        assert_eq!(event.location, "Anywhere");
        assert_eq!(event.priority, 5);
        assert_eq!(event.stamp, clock.utc);
        assert_eq!(
            event.start,
            EventTime::Zoned {
                datetime: date(2025, 3, 20).and_hms_opt(8, 0, 0).unwrap(),
                tzid: "Europe/Berlin".to_string(),
            }
        );
        assert_eq!(event.organizer.role, ParticipantRole::Chair);
        assert_eq!(event.attendees.len(), 2);
        assert!(Uuid::parse_str(&event.uid).is_ok());
    }

    #[test]
    fn test_build_event_without_description() {
        let descriptors = sample_events(false);
        let event = build_event(&descriptors[0], &test_clock()).unwrap();
        assert_eq!(event.description, None);
    }

    #[test]
    fn test_build_calendar_keeps_order_and_unique_uids() {
        let descriptors = sample_events(true);
        let calendar = build_calendar(&descriptors, &test_clock()).unwrap();

        assert_eq!(calendar.events.len(), 7);
        for (event, descriptor) in calendar.events.iter().zip(&descriptors) {
            assert_eq!(event.summary, descriptor.title);
            assert!(event.start.naive() < event.end.naive());
        }

        let uids: HashSet<_> = calendar.events.iter().map(|e| e.uid.as_str()).collect();
        assert_eq!(uids.len(), 7);
    }

    #[test]
    fn test_build_calendar_shares_one_stamp() {
        let calendar = build_calendar(&sample_events(true), &test_clock()).unwrap();
        let stamps: HashSet<_> = calendar.events.iter().map(|e| e.stamp).collect();
        assert_eq!(stamps.len(), 1);
    }
}
