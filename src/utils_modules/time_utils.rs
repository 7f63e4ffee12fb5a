use crate::common::*;

#[doc = "Today's calendar date in UTC. GitHub buckets traffic by UTC day."]
pub fn current_utc_date() -> NaiveDate {
    Utc::now().date_naive()
}

#[doc = r#"
    The `days` consecutive dates ending at `end` (inclusive), oldest first.

    `trailing_window_dates(d, 3)` is `[d - 2, d - 1, d]`.
"#]
pub fn trailing_window_dates(end: NaiveDate, days: usize) -> Vec<NaiveDate> {
    (0..days)
        .map(|i| end - chrono::Duration::days((days - 1 - i) as i64))
        .collect()
}

#[doc = "Axis label in `M/dd` form, e.g. `3/07`"]
pub fn format_chart_label(date: NaiveDate) -> String {
    date.format("%-m/%d").to_string()
}
