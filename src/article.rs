use chrono::NaiveDate;

/// One entry of the catalog.
///
/// `filename` is the source file name (e.g. `2014_06_17-use_cron.md`); the
/// published page lives at `{path}/{filename}.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Article {
    pub title: String,
    pub date: NaiveDate,
    pub filename: String,
    pub path: String,
    pub description: String,
}

impl Article {
    pub fn date_str(&self) -> String {
        self.date.format("%Y/%m/%d").to_string()
    }
}
