use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::value::{HoursValue, impl_string_value};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

const EXAMPLES: &[&str] = &["00:00", "23:59", "24:00"];

/// A point in the day between `00:00` and `24:00`, stored as whole minutes
/// since midnight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };
    pub const END_OF_DAY: TimeOfDay = TimeOfDay {
        minutes: MINUTES_PER_DAY,
    };

    pub fn new(hour: u16, minute: u16) -> ValidationResult<Self> {
        if hour > 24 || minute >= MINUTES_PER_HOUR || (hour == 24 && minute != 0) {
            return Err(Self::error(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self {
            minutes: hour * MINUTES_PER_HOUR + minute,
        })
    }

    pub fn from_minutes(minutes: u16) -> ValidationResult<Self> {
        if minutes > MINUTES_PER_DAY {
            return Err(Self::error(minutes.to_string()));
        }
        Ok(Self { minutes })
    }

    pub fn minutes(&self) -> u16 {
        self.minutes
    }

    pub fn hour(&self) -> u16 {
        self.minutes / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.minutes % MINUTES_PER_HOUR
    }

    /// `None` for `24:00`, which has no `NaiveTime` counterpart.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "hour", EXAMPLES, input)
    }
}

fn two_digits(part: &str) -> Option<u16> {
    let bytes = part.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(u16::from(bytes[0] - b'0') * 10 + u16::from(bytes[1] - b'0'))
}

impl HoursValue for TimeOfDay {
    const ARGUMENT: &'static str = "hour";

    fn parse(text: &str) -> ValidationResult<Self> {
        let (hh, mm) = text
            .trim()
            .split_once(':')
            .ok_or_else(|| Self::error(text))?;
        let (hour, minute) = match (two_digits(hh), two_digits(mm)) {
            (Some(hour), Some(minute)) => (hour, minute),
            _ => return Err(Self::error(text)),
        };
        Self::new(hour, minute).map_err(|_| Self::error(text))
    }

    fn render(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

impl_string_value!(TimeOfDay);

impl From<NaiveTime> for TimeOfDay {
    /// Seconds and fractions are truncated.
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}
