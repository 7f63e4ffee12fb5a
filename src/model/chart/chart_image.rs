use crate::common::*;

use crate::enums::chart_theme::*;

#[derive(Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct ChartImage {
    repository_name: String,
    theme: ChartTheme,
    bytes: Vec<u8>,
}

impl ChartImage {
    pub fn file_name(&self) -> String {
        self.theme.file_name(&self.repository_name)
    }
}

impl fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartImage")
            .field("repository_name", &self.repository_name)
            .field("theme", &self.theme)
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .finish()
    }
}
