use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Label returned when the season code is missing or not a number.
pub const DEFAULT_LABEL: &str = "24/25";

/// Season codes as shipped with the dashboard; code 1 is the 2018/2019
/// heating season.
static SEASON_LABELS: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "18/19"),
        (2, "19/20"),
        (3, "20/21"),
        (4, "21/22"),
        (5, "22/23"),
        (6, "23/24"),
        (7, "24/25"),
        (8, "25/26"),
        (9, "26/27"),
        (10, "27/28"),
    ])
});

/// Map a season code to its `YY/YY` label. Codes outside the table continue
/// the same progression arithmetically (`{17+n}/{18+n}`); anything that does
/// not parse as an integer falls back to [`DEFAULT_LABEL`].
pub fn label(raw: &str) -> String {
    match raw.trim().parse::<i64>() {
        Ok(n) => SEASON_LABELS
            .get(&n)
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{}/{}", 17 + n, 18 + n)),
        Err(_) => DEFAULT_LABEL.to_string(),
    }
}
