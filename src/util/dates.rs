use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Convert a calendar date to the stored timestamp: local midnight of that
/// date, held as UTC. Converting back to local time always lands on the same
/// calendar day, so overdue comparison is offset-safe.
pub fn date_to_due(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// Parse date input in `YYYY-MM-DD` form.
pub fn parse_due(input: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()?;
    Some(date_to_due(date))
}

/// Split an entered title into title text and due date. The due date is a
/// trailing `@YYYY-MM-DD` token: `"Buy milk @2025-12-31"`.
pub fn parse_title_and_due(s: &str) -> (String, Option<DateTime<Utc>>) {
    let trimmed = s.trim_end();
    if let Some(last_space) = trimmed.rfind(' ') {
        let last_word = &trimmed[last_space + 1..];
        if let Some(date_str) = last_word.strip_prefix('@')
            && let Some(due) = parse_due(date_str)
        {
            return (trimmed[..last_space].trim_end().to_string(), Some(due));
        }
    } else if let Some(date_str) = trimmed.strip_prefix('@')
        && let Some(due) = parse_due(date_str)
    {
        return (String::new(), Some(due));
    }
    (trimmed.to_string(), None)
}

/// Long display form: "01 Oct 2025"
pub fn format_long(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d %b %Y").to_string()
}

/// Short display form: "01 Oct"
pub fn format_short(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_due_accepts_iso_dates() {
        let due = parse_due("2025-12-31").unwrap();
        assert_eq!(due.with_timezone(&Local).date_naive().to_string(), "2025-12-31");
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("tomorrow").is_none());
        assert!(parse_due("2025-13-01").is_none());
        assert!(parse_due("").is_none());
    }

    #[test]
    fn title_with_due_suffix_splits() {
        let (title, due) = parse_title_and_due("Buy milk @2025-12-31");
        assert_eq!(title, "Buy milk");
        assert!(due.is_some());
    }

    #[test]
    fn title_without_suffix_passes_through() {
        let (title, due) = parse_title_and_due("Buy milk");
        assert_eq!(title, "Buy milk");
        assert!(due.is_none());
    }

    #[test]
    fn at_token_in_the_middle_is_title_text() {
        let (title, due) = parse_title_and_due("Meet @2025-12-31 with Ana");
        assert_eq!(title, "Meet @2025-12-31 with Ana");
        assert!(due.is_none());
    }

    #[test]
    fn malformed_due_suffix_stays_in_title() {
        let (title, due) = parse_title_and_due("Buy milk @someday");
        assert_eq!(title, "Buy milk @someday");
        assert!(due.is_none());
    }

    #[test]
    fn bare_due_token_yields_empty_title() {
        let (title, due) = parse_title_and_due("@2025-12-31");
        assert!(title.is_empty());
        assert!(due.is_some());
    }

    #[test]
    fn display_formats() {
        let due = parse_due("2025-10-01").unwrap();
        assert_eq!(format_long(due), "01 Oct 2025");
        assert_eq!(format_short(due), "01 Oct");
    }
}
