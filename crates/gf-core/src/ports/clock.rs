use chrono::{NaiveDate, NaiveDateTime};

/// Property-local wall clock.
///
/// All date arithmetic in the domain is local calendar time; tests inject a
/// fixed clock instead of reading the system.
pub trait ClockPort: Send + Sync {
    fn now_local(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now_local().date()
    }
}
