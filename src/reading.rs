use serde::{Deserialize, Serialize};

/// One normalized meter reading: the reading date, the heating-season label,
/// and the counter values for the five rooms. Field names double as the JSON
/// keys the dashboard expects, so no rename attributes are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub data: String,
    /// Season label in `YY/YY` form, e.g. `24/25`.
    pub stagione: String,
    pub cucina: f64,
    pub soggiorno: f64,
    pub camera: f64,
    pub cameretta: f64,
    pub bagno: f64,
}
