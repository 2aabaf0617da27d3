use chrono::NaiveDate;

/// Formats tried in order. Month/day wins over day/month for ambiguous
/// dates like `03/04/2024`; downstream data depends on that preference.
const SLASH_FORMATS: [&str; 2] = ["%m/%d/%Y", "%d/%m/%Y"];

/// Convert a date string to ISO `YYYY-MM-DD`. Input that matches neither
/// slash format is assumed to be ISO already and is returned trimmed but
/// otherwise unchanged; this never fails.
pub fn to_iso(raw: &str) -> String {
    let raw = raw.trim();
    for fmt in SLASH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}
