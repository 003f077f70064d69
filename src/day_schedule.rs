use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::time_range_set::TimeRangeSet;
use crate::value::{HoursValue, impl_string_value};
use crate::weekday_set::WeekdaySet;

const EXAMPLES: &[&str] = &["Mon 09:00-12:00", "Tue-Fri 09:00-12:00+13:00-17:00"];

/// Opening hours shared by a group of weekdays, e.g. `Mon-Fri 09:00-17:00`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DaySchedule {
    days: WeekdaySet,
    hours: TimeRangeSet,
}

impl DaySchedule {
    pub fn new(days: WeekdaySet, hours: TimeRangeSet) -> Self {
        Self { days, hours }
    }

    pub fn days(&self) -> &WeekdaySet {
        &self.days
    }

    pub fn hours(&self) -> &TimeRangeSet {
        &self.hours
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "day opening hours", EXAMPLES, input)
    }
}

impl HoursValue for DaySchedule {
    const ARGUMENT: &'static str = "dayOpeningHours";

    fn parse(text: &str) -> ValidationResult<Self> {
        let (days, hours) = text.split_once(' ').ok_or_else(|| Self::error(text))?;
        if hours.contains(char::is_whitespace) {
            return Err(Self::error(text));
        }
        let parsed = WeekdaySet::parse(days).and_then(|days| {
            let hours = TimeRangeSet::parse(hours)?;
            Ok(Self::new(days, hours))
        });
        parsed.map_err(|cause| {
            tracing::debug!(input = text, %cause, "rejected day opening hours");
            Self::error(text)
        })
    }

    fn render(&self) -> String {
        format!("{} {}", self.days.render(), self.hours.render())
    }
}

impl_string_value!(DaySchedule);
