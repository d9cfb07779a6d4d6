//! Expiry date classification for the admin dashboard.
//!
//! Items carry an optional calendar expiry date; the dashboard flags rows
//! that are expired, expire today, or expire within the warning window.

use chrono::NaiveDate;

/// Days ahead within which an item counts as "expiring soon".
pub const EXPIRY_WARNING_DAYS: i64 = 7;

/// Stock level at or below which an item is flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 2;

/// Where an item's expiry date falls relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// No expiry date recorded.
    None,
    /// Date is in the past.
    Expired,
    /// Date is today.
    ExpiresToday,
    /// Date is within [`EXPIRY_WARNING_DAYS`]; payload is days remaining.
    ExpiringSoon(i64),
    /// Date is further out than the warning window.
    Fresh,
}

impl ExpiryStatus {
    /// Classify an optional expiry date against `today`.
    pub fn classify(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        let Some(date) = expiry else {
            return Self::None;
        };
        let days_left = (date - today).num_days();
        if days_left < 0 {
            Self::Expired
        } else if days_left == 0 {
            Self::ExpiresToday
        } else if days_left <= EXPIRY_WARNING_DAYS {
            Self::ExpiringSoon(days_left)
        } else {
            Self::Fresh
        }
    }

    /// Badge text for the dashboard, empty when nothing needs flagging.
    pub fn badge(&self) -> String {
        match self {
            Self::Expired => "Expired".to_string(),
            Self::ExpiresToday => "Expires today".to_string(),
            Self::ExpiringSoon(days) => format!("Expiring in {days} days"),
            Self::None | Self::Fresh => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_date_is_expired() {
        let status = ExpiryStatus::classify(Some(day(2026, 1, 1)), day(2026, 1, 2));
        assert_eq!(status, ExpiryStatus::Expired);
        assert_eq!(status.badge(), "Expired");
    }

    #[test]
    fn same_day_expires_today() {
        let status = ExpiryStatus::classify(Some(day(2026, 1, 2)), day(2026, 1, 2));
        assert_eq!(status, ExpiryStatus::ExpiresToday);
    }

    #[test]
    fn within_window_is_expiring_soon() {
        let status = ExpiryStatus::classify(Some(day(2026, 1, 9)), day(2026, 1, 2));
        assert_eq!(status, ExpiryStatus::ExpiringSoon(7));
        assert_eq!(status.badge(), "Expiring in 7 days");
    }

    #[test]
    fn beyond_window_is_fresh() {
        let status = ExpiryStatus::classify(Some(day(2026, 1, 10)), day(2026, 1, 2));
        assert_eq!(status, ExpiryStatus::Fresh);
        assert_eq!(status.badge(), "");
    }

    #[test]
    fn missing_date_is_none() {
        assert_eq!(
            ExpiryStatus::classify(None, day(2026, 1, 2)),
            ExpiryStatus::None
        );
    }
}
