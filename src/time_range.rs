use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::time_of_day::TimeOfDay;
use crate::value::{HoursValue, impl_string_value};

const EXAMPLES: &[&str] = &["00:00-24:00", "06:00-21:00"];

/// A half-open span `[start, end)` within a single day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> ValidationResult<Self> {
        if start >= end {
            return Err(Self::error(format!("{start}-{end}")));
        }
        Ok(Self { start, end })
    }

    pub fn full_day() -> Self {
        Self {
            start: TimeOfDay::MIDNIGHT,
            end: TimeOfDay::END_OF_DAY,
        }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Ranges that merely touch (`09:00-12:00` and `12:00-13:00`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "hour range", EXAMPLES, input)
    }
}

impl HoursValue for TimeRange {
    const ARGUMENT: &'static str = "hourRange";

    fn parse(text: &str) -> ValidationResult<Self> {
        let (from, to) = text.split_once('-').ok_or_else(|| Self::error(text))?;
        let start = TimeOfDay::parse(from).map_err(|_| Self::error(text))?;
        let end = TimeOfDay::parse(to).map_err(|_| Self::error(text))?;
        Self::new(start, end).map_err(|_| Self::error(text))
    }

    fn render(&self) -> String {
        format!("{}-{}", self.start.render(), self.end.render())
    }
}

impl_string_value!(TimeRange);
