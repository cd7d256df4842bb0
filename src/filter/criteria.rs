use chrono::NaiveDate;

/// Relative date window, spelled on the wire as `all|today|7|30|month`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::IntoStaticStr,
)]
pub enum DatePreset {
    #[default]
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "today")]
    Today,
    #[strum(serialize = "7")]
    Next7Days,
    #[strum(serialize = "30")]
    Next30Days,
    #[strum(serialize = "month")]
    ThisMonth,
}

/// The active narrowing criteria. An absolute `from_date`/`to_date` bound,
/// when set, overrides the preset entirely; the two are never combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub tag_tokens: String,
    pub date_preset: DatePreset,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn has_absolute_range(&self) -> bool {
        self.from_date.is_some() || self.to_date.is_some()
    }
}
