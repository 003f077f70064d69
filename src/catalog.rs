use std::collections::BTreeMap;
use std::fmt;

use crate::week_schedule::WeekSchedule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    BlankName,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::BlankName => write!(f, "schedule name must not be blank"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Weekly opening hours keyed by a name such as a store or location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursCatalog {
    schedules: BTreeMap<String, WeekSchedule>,
}

impl HoursCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the schedule stored under `name` (trimmed), returning
    /// the schedule it replaced.
    pub fn insert(
        &mut self,
        name: impl AsRef<str>,
        schedule: WeekSchedule,
    ) -> Result<Option<WeekSchedule>, CatalogError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(CatalogError::BlankName);
        }
        Ok(self.schedules.insert(name.to_string(), schedule))
    }

    pub fn get(&self, name: &str) -> Option<&WeekSchedule> {
        self.schedules.get(name.trim())
    }

    pub fn remove(&mut self, name: &str) -> Option<WeekSchedule> {
        self.schedules.remove(name.trim())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schedules.contains_key(name.trim())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schedules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WeekSchedule)> {
        self.schedules
            .iter()
            .map(|(name, schedule)| (name.as_str(), schedule))
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}
