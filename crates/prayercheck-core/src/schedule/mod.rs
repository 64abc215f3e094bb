//! The monthly schedule model and its ingestion.
//!
//! Schedules arrive as JSON (or YAML) from the extraction step. They are
//! validated structurally against the embedded JSON Schema and then
//! deserialized into the typed model. Plausibility is the checker's job,
//! not this module's.

mod parser;
mod schema;

pub use parser::{DailyPrayerSchedule, MonthlyPrayerSchedule, PrayerTimes, ScheduleError};
pub use schema::{validate_schedule_schema, SchemaError};
