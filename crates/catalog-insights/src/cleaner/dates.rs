//! Best-effort date parsing for the catalog's date column.
//!
//! A value that matches none of the known layouts becomes null; it is never
//! an error.

use crate::error::Result;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

/// Date-only layouts, tried in order.
const DATE_FORMATS: [&str; 7] = [
    "%B %d, %Y", // August 14, 2020
    "%b %d, %Y", // Aug 14, 2020
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d-%b-%y", // 14-Aug-20
    "%d %B %Y",
    "%Y/%m/%d",
];

/// Layouts carrying a time of day, which is discarded.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse one raw date string.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Parse a string series into dates, nulling failures.
pub(crate) fn parse_date_values(series: &Series) -> Result<Vec<Option<NaiveDate>>> {
    let str_series = series.str()?;
    Ok(str_series
        .into_iter()
        .map(|opt_val| opt_val.and_then(parse_date))
        .collect())
}

/// Build a polars `Date` series from parsed values.
pub(crate) fn date_series(name: &str, dates: &[Option<NaiveDate>]) -> Series {
    DateChunked::from_naive_date_options(name.into(), dates.iter().copied()).into_series()
}

/// Build the calendar-year series aligned with `dates`.
pub(crate) fn year_series(name: &str, dates: &[Option<NaiveDate>]) -> Series {
    let years: Vec<Option<i32>> = dates.iter().map(|d| d.map(|d| d.year())).collect();
    Series::new(name.into(), years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_long_month_format() {
        assert_eq!(parse_date("August 14, 2020"), Some(ymd(2020, 8, 14)));
        assert_eq!(parse_date("May 1, 2019"), Some(ymd(2019, 5, 1)));
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(parse_date("  December  31,   2019 "), Some(ymd(2019, 12, 31)));
    }

    #[test]
    fn test_parse_other_layouts() {
        assert_eq!(parse_date("Aug 14, 2020"), Some(ymd(2020, 8, 14)));
        assert_eq!(parse_date("2021-03-05"), Some(ymd(2021, 3, 5)));
        assert_eq!(parse_date("03/05/2021"), Some(ymd(2021, 3, 5)));
        assert_eq!(parse_date("2021-03-05 12:30:00"), Some(ymd(2021, 3, 5)));
    }

    #[test]
    fn test_parse_failures_are_none() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("February 30, 2020"), None);
    }

    #[test]
    fn test_parse_date_values_keeps_alignment() {
        let series = Series::new(
            "Release_Date".into(),
            &[Some("August 14, 2020"), Some("not-a-date"), None],
        );
        let dates = parse_date_values(&series).unwrap();
        assert_eq!(dates, vec![Some(ymd(2020, 8, 14)), None, None]);

        let years = year_series("Year Added", &dates);
        assert_eq!(years.dtype(), &DataType::Int32);
        assert_eq!(years.null_count(), 2);
        assert_eq!(years.i32().unwrap().get(0), Some(2020));

        let parsed = date_series("Date Added", &dates);
        assert_eq!(parsed.dtype(), &DataType::Date);
        assert_eq!(parsed.null_count(), 2);
    }
}
