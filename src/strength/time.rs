//! Time units in seconds. Months are 30 days, years 365.

pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = MINUTE * 60.0;
pub const DAY: f64 = HOUR * 24.0;
pub const WEEK: f64 = DAY * 7.0;
pub const MONTH: f64 = DAY * 30.0;
pub const YEAR: f64 = DAY * 365.0;
pub const CENTURY: f64 = YEAR * 100.0;
pub const MILLENNIUM: f64 = YEAR * 1000.0;
pub const MILLION_YEARS: f64 = YEAR * 1e6;
pub const BILLION_YEARS: f64 = YEAR * 1e9;
pub const TRILLION_YEARS: f64 = YEAR * 1e12;

/// Age of the universe, ~13.8 billion years.
pub const UNIVERSE_AGE: f64 = YEAR * 13.8e9;
