//! CLI subcommands, one module per resource family.

pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod users;

use chrono::{DateTime, Utc};

/// Short human-readable date for table output, e.g. "03 Nov 2025".
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2025, 11, 3, 14, 30, 0).unwrap();
        assert_eq!(format_date(&date), "03 Nov 2025");
    }
}
