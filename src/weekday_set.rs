use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use crate::error::{ValidationError, ValidationResult};
use crate::value::{HoursValue, impl_string_value};
use crate::weekday::Weekday;

const EXAMPLES: &[&str] = &["Mon/Tue/Wed-Fri"];

/// A non-empty set of weekdays written as `/`-separated days and
/// contiguous `First-Last` groups, e.g. `Mon/Wed-Fri`.
///
/// The groups as written are kept for rendering, ordered by their first day;
/// groups sharing a day are merged into one. Equality and hashing only look at
/// the days, so `Mon/Tue` equals `Mon-Tue`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekdaySet {
    days: BTreeSet<Weekday>,
    groups: Vec<(Weekday, Weekday)>,
}

impl WeekdaySet {
    /// Groups the days into maximal runs, so `[Sat, Sun]` renders as `SAT-SUN`.
    pub fn new<I>(days: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let days: BTreeSet<Weekday> = days.into_iter().collect();
        if days.is_empty() {
            return Err(Self::error(""));
        }
        let groups = maximal_runs(&days);
        Ok(Self { days, groups })
    }

    /// Monday through Sunday.
    pub fn all() -> Self {
        Self {
            days: Weekday::ALL.into_iter().collect(),
            groups: vec![(Weekday::Mon, Weekday::Sun)],
        }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`; a set holds at least one day.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The `(first, last)` groups used for rendering.
    pub fn groups(&self) -> &[(Weekday, Weekday)] {
        &self.groups
    }

    /// Maximal runs of consecutive days, in week order.
    pub fn runs(&self) -> Vec<(Weekday, Weekday)> {
        maximal_runs(&self.days)
    }

    fn from_groups(mut groups: Vec<(Weekday, Weekday)>) -> Option<Self> {
        groups.sort();
        // Groups sharing a day merge; groups that only touch stay apart.
        let mut merged: Vec<(Weekday, Weekday)> = Vec::with_capacity(groups.len());
        for (first, last) in groups {
            match merged.last_mut() {
                Some((_, end)) if first <= *end => *end = (*end).max(last),
                _ => merged.push((first, last)),
            }
        }
        let days: BTreeSet<Weekday> = merged
            .iter()
            .flat_map(|&(first, last)| days_between(first, last))
            .collect();
        if days.is_empty() {
            return None;
        }
        Some(Self {
            days,
            groups: merged,
        })
    }

    fn error(input: impl Into<String>) -> ValidationError {
        ValidationError::invalid(Self::ARGUMENT, "multiple days of the week", EXAMPLES, input)
    }
}

fn days_between(first: Weekday, last: Weekday) -> impl Iterator<Item = Weekday> {
    (first.ordinal()..=last.ordinal()).filter_map(Weekday::from_ordinal)
}

fn maximal_runs(days: &BTreeSet<Weekday>) -> Vec<(Weekday, Weekday)> {
    let mut runs: Vec<(Weekday, Weekday)> = Vec::new();
    for &day in days {
        match runs.last_mut() {
            Some((_, last)) if last.ordinal() + 1 == day.ordinal() => *last = day,
            _ => runs.push((day, day)),
        }
    }
    runs
}

fn parse_group(segment: &str) -> Option<(Weekday, Weekday)> {
    let tokens: Vec<&str> = segment.split('-').collect();
    match tokens.as_slice() {
        [single] => Weekday::parse(single).ok().map(|day| (day, day)),
        [first, last] => {
            let first = Weekday::parse(first).ok()?;
            let last = Weekday::parse(last).ok()?;
            (first <= last).then_some((first, last))
        }
        _ => None,
    }
}

impl HoursValue for WeekdaySet {
    const ARGUMENT: &'static str = "multipleDayOfTheWeek";

    fn parse(text: &str) -> ValidationResult<Self> {
        let groups = text
            .split('/')
            .map(parse_group)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| Self::error(text))?;
        Self::from_groups(groups).ok_or_else(|| Self::error(text))
    }

    fn render(&self) -> String {
        self.groups
            .iter()
            .map(|&(first, last)| {
                if first == last {
                    first.as_str().to_string()
                } else {
                    format!("{}-{}", first.as_str(), last.as_str())
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl_string_value!(WeekdaySet);

impl PartialEq for WeekdaySet {
    fn eq(&self, other: &Self) -> bool {
        self.days == other.days
    }
}

impl Eq for WeekdaySet {}

impl Hash for WeekdaySet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.days.hash(state);
    }
}
