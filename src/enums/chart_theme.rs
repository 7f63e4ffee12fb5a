use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartTheme {
    Light,
    Dark,
}

impl ChartTheme {
    #[doc = "Suffix appended to the chart file stem, empty for the light variant"]
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ChartTheme::Light => "",
            ChartTheme::Dark => "_Dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartTheme::Light => "Light",
            ChartTheme::Dark => "Dark",
        }
    }

    #[doc = "`{repository_name}_ViewsChart[_Dark].png`"]
    pub fn file_name(&self, repository_name: &str) -> String {
        format!("{}_ViewsChart{}.png", repository_name, self.file_suffix())
    }
}

impl fmt::Display for ChartTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
