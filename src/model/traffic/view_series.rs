use crate::common::*;

use crate::dto::github::traffic_views_response::*;
use crate::utils_modules::time_utils::*;

#[doc = "GitHub's traffic lookback, and the number of buckets on every chart"]
pub const VIEW_WINDOW_DAYS: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct ViewPoint {
    date: NaiveDate,
    count: u64,
}

#[doc = r#"
    Dense daily view counts for the `VIEW_WINDOW_DAYS` days ending today, oldest first.

    Always holds exactly `VIEW_WINDOW_DAYS` points on consecutive dates.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSeries {
    points: Vec<ViewPoint>,
}

impl ViewSeries {
    #[doc = r#"
        Buckets sparse raw records into the trailing window ending at `today`.

        Bucket `i` holds the day `today - (13 - i)`. Days with no record get 0, records
        outside the window are ignored, and records sharing a day are summed.
    "#]
    pub fn normalize(records: &[DailyViewRecord], today: NaiveDate) -> Self {
        let points: Vec<ViewPoint> = trailing_window_dates(today, VIEW_WINDOW_DAYS)
            .into_iter()
            .map(|date| {
                let count: u64 = records
                    .iter()
                    .filter(|record| record.date() == date)
                    .map(|record| record.count)
                    .sum();
                ViewPoint::new(date, count)
            })
            .collect();

        ViewSeries { points }
    }

    pub fn points(&self) -> &[ViewPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<String> {
        self.points()
            .iter()
            .map(|point| format_chart_label(point.date))
            .collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|point| point.count).collect()
    }

    pub fn total_views(&self) -> u64 {
        self.points.iter().map(|point| point.count).sum()
    }
}
