use super::{PersistenceError, PersistenceResult};
use crate::catalog::HoursCatalog;
use crate::value::HoursValue;
use crate::week_schedule::WeekSchedule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct CatalogSnapshot {
    version: u32,
    schedules: BTreeMap<String, WeekSchedule>,
}

impl CatalogSnapshot {
    fn from_catalog(catalog: &HoursCatalog) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            schedules: catalog
                .iter()
                .map(|(name, schedule)| (name.to_string(), schedule.clone()))
                .collect(),
        }
    }

    fn into_catalog(self) -> PersistenceResult<HoursCatalog> {
        if self.version != SNAPSHOT_VERSION {
            return Err(PersistenceError::InvalidData(format!(
                "unsupported catalog version {} (expected {SNAPSHOT_VERSION})",
                self.version
            )));
        }
        let mut catalog = HoursCatalog::new();
        for (name, schedule) in self.schedules {
            if catalog.insert(&name, schedule)?.is_some() {
                return Err(PersistenceError::InvalidData(format!(
                    "duplicate schedule name '{}'",
                    name.trim()
                )));
            }
        }
        Ok(catalog)
    }
}

pub fn save_catalog_to_json<P: AsRef<Path>>(
    catalog: &HoursCatalog,
    path: P,
) -> PersistenceResult<()> {
    let snapshot = CatalogSnapshot::from_catalog(catalog);
    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(file, &snapshot)?;
    tracing::info!(path = %path.as_ref().display(), schedules = catalog.len(), "saved catalog as json");
    Ok(())
}

pub fn load_catalog_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<HoursCatalog> {
    let file = File::open(path.as_ref())?;
    let snapshot: CatalogSnapshot = serde_json::from_reader(file)?;
    let catalog = snapshot.into_catalog()?;
    tracing::info!(path = %path.as_ref().display(), schedules = catalog.len(), "loaded catalog from json");
    Ok(catalog)
}

#[derive(Serialize, Deserialize)]
struct CatalogCsvRecord {
    name: String,
    opening_hours: String,
}

pub fn save_catalog_to_csv<P: AsRef<Path>>(
    catalog: &HoursCatalog,
    path: P,
) -> PersistenceResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);
    for (name, schedule) in catalog.iter() {
        writer.serialize(CatalogCsvRecord {
            name: name.to_string(),
            opening_hours: schedule.render(),
        })?;
    }
    writer.flush()?;
    tracing::info!(path = %path.as_ref().display(), schedules = catalog.len(), "saved catalog as csv");
    Ok(())
}

pub fn load_catalog_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<HoursCatalog> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::Reader::from_reader(file);
    let mut catalog = HoursCatalog::new();
    for (row, record) in reader.deserialize::<CatalogCsvRecord>().enumerate() {
        let record = record?;
        tracing::debug!(row, name = %record.name, "reading catalog row");
        let schedule = WeekSchedule::parse(&record.opening_hours)?;
        if catalog.insert(&record.name, schedule)?.is_some() {
            return Err(PersistenceError::InvalidData(format!(
                "CSV file contained duplicate schedule name '{}'",
                record.name.trim()
            )));
        }
    }

    if catalog.is_empty() {
        return Err(PersistenceError::InvalidData(
            "CSV file contained no schedules".into(),
        ));
    }
    tracing::info!(path = %path.as_ref().display(), schedules = catalog.len(), "loaded catalog from csv");
    Ok(catalog)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

/// Saves as CSV when the path ends in `.csv`, otherwise as JSON.
pub fn save_catalog<P: AsRef<Path>>(catalog: &HoursCatalog, path: P) -> PersistenceResult<()> {
    if is_csv(path.as_ref()) {
        save_catalog_to_csv(catalog, path)
    } else {
        save_catalog_to_json(catalog, path)
    }
}

/// Loads CSV when the path ends in `.csv`, otherwise JSON.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> PersistenceResult<HoursCatalog> {
    if is_csv(path.as_ref()) {
        load_catalog_from_csv(path)
    } else {
        load_catalog_from_json(path)
    }
}
