use chrono::{NaiveDate, Utc};

/// Today's date in the browser's local calendar
pub fn today_local() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| Utc::now().date_naive())
}

/// Value for the `min` attribute of a date input (YYYY-MM-DD)
pub fn to_input_value(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a date for display (e.g., "December 1, 2025")
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
