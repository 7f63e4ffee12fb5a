use crate::common::*;

#[doc = "`GET /repositories/{id}/traffic/views?per=day`"]
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TrafficViewsResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub uniques: u64,
    #[serde(default)]
    pub views: Vec<DailyViewRecord>,
}

#[doc = "One raw day bucket. GitHub omits days without recorded views."]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct DailyViewRecord {
    pub timestamp: DateTime<Utc>,
    pub count: u64,
    #[serde(default)]
    pub uniques: u64,
}

impl DailyViewRecord {
    #[doc = "UTC calendar day of the bucket"]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}
