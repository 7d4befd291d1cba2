//! The single "now" reading shared by every event of a run.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::event::EventTime;

/// Local timezone of the machine running the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    /// IANA zone reported by the system, written as TZID
    Named(Tz),
    /// Zone could not be determined, times are written as floating local time
    Floating,
}

impl LocalZone {
    /// Detect the system zone via `iana-time-zone`.
    pub fn detect() -> Self {
        match iana_time_zone::get_timezone() {
            Ok(name) => match name.parse::<Tz>() {
                Ok(tz) => LocalZone::Named(tz),
                Err(_) => {
                    debug!(zone = %name, "system zone is not in the tz database");
                    LocalZone::Floating
                }
            },
            Err(e) => {
                debug!(error = %e, "could not determine system zone");
                LocalZone::Floating
            }
        }
    }

    /// Tag a local wall-clock time with this zone.
    pub fn event_time(&self, datetime: NaiveDateTime) -> EventTime {
        match self {
            LocalZone::Named(tz) => EventTime::Zoned {
                datetime,
                tzid: tz.name().to_string(),
            },
            LocalZone::Floating => EventTime::Floating(datetime),
        }
    }
}

/// Wall-clock readings captured once at the start of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunClock {
    /// Today's date in the local zone
    pub today: NaiveDate,
    /// The current instant, used as DTSTAMP
    pub utc: DateTime<Utc>,
    pub zone: LocalZone,
}

impl RunClock {
    pub fn capture() -> Self {
        let utc = Utc::now();
        let zone = LocalZone::detect();
        let today = match zone {
            LocalZone::Named(tz) => utc.with_timezone(&tz).date_naive(),
            LocalZone::Floating => utc.with_timezone(&Local).date_naive(),
        };

        RunClock { today, utc, zone }
    }
}
