use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Display form used by cards and tables, e.g. "15 March 2024".
pub fn format_long(date: &NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
