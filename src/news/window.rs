use chrono::{Days, NaiveDate, Utc};

/// An inclusive range of calendar days used to query company news.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsWindow {
    /// First day of the window.
    pub from: NaiveDate,
    /// Last day of the window.
    pub to: NaiveDate,
}

impl NewsWindow {
    /// The window `[to - lookback_days, to]`.
    pub fn ending(to: NaiveDate, lookback_days: u32) -> Self {
        let from = to
            .checked_sub_days(Days::new(u64::from(lookback_days)))
            .unwrap_or(NaiveDate::MIN);
        Self { from, to }
    }

    /// The window ending on the current UTC date.
    pub fn ending_today(lookback_days: u32) -> Self {
        Self::ending(Utc::now().date_naive(), lookback_days)
    }

    pub(crate) fn from_param(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub(crate) fn to_param(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }
}
