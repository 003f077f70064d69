pub mod catalog;
pub mod config;
pub mod day_schedule;
pub mod error;
pub mod persistence;
pub mod time_of_day;
pub mod time_range;
pub mod time_range_set;
pub mod value;
pub mod week_schedule;
pub mod weekday;
pub mod weekday_set;

pub use catalog::{CatalogError, HoursCatalog};
pub use config::CliConfig;
pub use day_schedule::DaySchedule;
pub use error::{ValidationError, ValidationResult};
pub use persistence::{
    PersistenceError, load_catalog, load_catalog_from_csv, load_catalog_from_json, save_catalog,
    save_catalog_to_csv, save_catalog_to_json,
};
pub use time_of_day::TimeOfDay;
pub use time_range::TimeRange;
pub use time_range_set::TimeRangeSet;
pub use value::{HoursValue, is_valid};
pub use week_schedule::WeekSchedule;
pub use weekday::Weekday;
pub use weekday_set::WeekdaySet;
