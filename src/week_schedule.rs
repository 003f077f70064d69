use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::day_schedule::DaySchedule;
use crate::error::{ValidationError, ValidationResult};
use crate::value::{HoursValue, impl_string_value};
use crate::weekday::Weekday;

const EXAMPLES: &[&str] = &["Mon-Fri 09:00-12:00+13:00-17:00,Sat/Sun 09:00-12:00"];

/// Weekly opening hours: day groups in the order they were written.
///
/// Groups are neither re-sorted nor checked for overlapping day coverage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekSchedule {
    entries: Vec<DaySchedule>,
}

impl WeekSchedule {
    pub fn new<I>(entries: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = DaySchedule>,
    {
        let entries: Vec<DaySchedule> = entries.into_iter().collect();
        if entries.is_empty() {
            return Err(Self::error(""));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DaySchedule] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &DaySchedule> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; a schedule holds at least one day group.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every weekday mentioned by at least one group.
    pub fn covered_days(&self) -> BTreeSet<Weekday> {
        self.entries
            .iter()
            .flat_map(|entry| entry.days().iter())
            .collect()
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "weekly opening hours", EXAMPLES, input)
    }
}

impl HoursValue for WeekSchedule {
    const ARGUMENT: &'static str = "weeklyOpeningHours";

    fn parse(text: &str) -> ValidationResult<Self> {
        let mut entries = Vec::new();
        for (idx, segment) in text.split(',').enumerate() {
            match DaySchedule::parse(segment) {
                Ok(entry) => entries.push(entry),
                Err(_) => {
                    tracing::debug!(segment, idx, "rejected weekly opening hours segment");
                    return Err(Self::error(text));
                }
            }
        }
        Self::new(entries).map_err(|_| Self::error(text))
    }

    fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.render())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl_string_value!(WeekSchedule);

impl<'a> IntoIterator for &'a WeekSchedule {
    type Item = &'a DaySchedule;
    type IntoIter = std::slice::Iter<'a, DaySchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
