//! ICS file generation.

use std::borrow::Cow;

use crate::event::{CalendarEvent, EventTime, FixtureCalendar, Participant};
use icalendar::{Calendar, Component, EventLike, Property, parser::unfold};

/// Maximum content line length in octets, excluding the CRLF (RFC 5545 section 3.1)
const MAX_LINE_OCTETS: usize = 75;

/// Generate .ics content for the whole calendar
pub fn generate_ics(calendar: &FixtureCalendar) -> String {
    let mut cal = Calendar::new();

    for event in &calendar.events {
        cal.push(build_vevent(event));
    }

    let cal = cal.done();

    // Refolded by push_line, so every line stays within MAX_LINE_OCTETS
    apply_calendar_header(&unfold(&cal.to_string()), calendar)
}

fn build_vevent(event: &CalendarEvent) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.uid);
    ics_event.summary(&event.summary);

    // DTSTAMP - the crate would otherwise stamp its own "now"
    let dtstamp = event.stamp.format("%Y%m%dT%H%M%SZ").to_string();
    ics_event.add_property("DTSTAMP", &dtstamp);

    add_datetime_property(&mut ics_event, "DTSTART", &event.start);
    add_datetime_property(&mut ics_event, "DTEND", &event.end);

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    ics_event.location(&event.location);
    ics_event.add_property("PRIORITY", event.priority.to_string());

    ics_event.append_property(participant_property("ORGANIZER", &event.organizer));

    // ATTENDEE (multi-property - can appear multiple times)
    for attendee in &event.attendees {
        ics_event.append_multi_property(participant_property("ATTENDEE", attendee));
    }

    ics_event.done()
}

/// Calendar address with CN and ROLE parameters
fn participant_property(name: &str, participant: &Participant) -> Property {
    let mut prop = Property::new(name, participant.mailto());
    prop.add_parameter("CN", &*param_value(&participant.name));
    prop.add_parameter("ROLE", participant.role.as_ics_str());
    prop
}

/// Quote a parameter value containing `,` `;` or `:` (RFC 5545 section 3.2)
fn param_value(value: &str) -> Cow<'_, str> {
    if value.contains([',', ';', ':']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Add a datetime property with proper formatting based on EventTime variant
fn add_datetime_property(ics_event: &mut icalendar::Event, name: &str, time: &EventTime) {
    match time {
        EventTime::Zoned { datetime, tzid } => {
            let mut prop = Property::new(name, datetime.format("%Y%m%dT%H%M%S").to_string());
            prop.add_parameter("TZID", tzid);
            ics_event.append_property(prop);
        }
        EventTime::Floating(datetime) => {
            ics_event.add_property(name, datetime.format("%Y%m%dT%H%M%S").to_string());
        }
    }
}

/// Replace the header lines the icalendar crate always writes
/// (VERSION, PRODID, CALSCALE) with the calendar's own metadata.
fn apply_calendar_header(ics: &str, calendar: &FixtureCalendar) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_header = false;

    for line in ics.lines() {
        if line == "BEGIN:VCALENDAR" {
            push_line(&mut result, line);
            push_line(&mut result, &format!("VERSION:{}", calendar.version));
            push_line(&mut result, &format!("CALSCALE:{}", calendar.scale));
            push_line(&mut result, &format!("PRODID:{}", calendar.product_id));
            in_header = true;
            continue;
        }

        if in_header {
            if line.starts_with("BEGIN:") || line.starts_with("END:") {
                in_header = false;
            } else if line.starts_with("VERSION:")
                || line.starts_with("PRODID:")
                || line.starts_with("CALSCALE:")
            {
                continue;
            }
        }

        push_line(&mut result, line);
    }

    result
}

/// Append one unfolded content line, folding it at MAX_LINE_OCTETS.
/// Continuation lines start with a space that counts towards the limit.
fn push_line(out: &mut String, line: &str) {
    let mut rest = line;
    let mut limit = MAX_LINE_OCTETS;

    while rest.len() > limit {
        let mut split = limit;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        out.push_str(&rest[..split]);
        out.push_str("\r\n ");
        rest = &rest[split..];
        limit = MAX_LINE_OCTETS - 1;
    }

    out.push_str(rest);
    out.push_str("\r\n");
}
