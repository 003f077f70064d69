use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::time_range::TimeRange;
use crate::value::{HoursValue, impl_string_value};

const EXAMPLES: &[&str] = &["09:00-12:00+13:00-17:00"];

/// One or more non-overlapping time ranges, kept sorted by start.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeRangeSet {
    ranges: Vec<TimeRange>,
}

impl TimeRangeSet {
    pub fn new<I>(ranges: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = TimeRange>,
    {
        let mut ranges: Vec<TimeRange> = ranges.into_iter().collect();
        ranges.sort_by_key(TimeRange::start);
        if ranges.is_empty() || has_overlap(&ranges) {
            return Err(Self::error(join(&ranges)));
        }
        Ok(Self { ranges })
    }

    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeRange> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Always `false`; a set holds at least one range.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn total_minutes(&self) -> u16 {
        self.ranges.iter().map(TimeRange::duration_minutes).sum()
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "list of hour ranges", EXAMPLES, input)
    }
}

// Expects `ranges` sorted by start.
fn has_overlap(ranges: &[TimeRange]) -> bool {
    ranges
        .windows(2)
        .any(|pair| pair[1].start() < pair[0].end())
}

fn join(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(|range| range.render())
        .collect::<Vec<_>>()
        .join("+")
}

impl HoursValue for TimeRangeSet {
    const ARGUMENT: &'static str = "hourRanges";

    fn parse(text: &str) -> ValidationResult<Self> {
        let ranges = text
            .split('+')
            .map(TimeRange::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| Self::error(text))?;
        Self::new(ranges).map_err(|_| Self::error(text))
    }

    fn render(&self) -> String {
        join(&self.ranges)
    }
}

impl_string_value!(TimeRangeSet);

impl<'a> IntoIterator for &'a TimeRangeSet {
    type Item = &'a TimeRange;
    type IntoIter = std::slice::Iter<'a, TimeRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
