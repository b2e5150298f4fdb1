use chrono::NaiveDate;
use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

/// POST /profile form body.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub address: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// GET /search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub term: String,
    pub limit: Option<u32>,
}

/// Simulated-work query parameters.
#[derive(Debug, Deserialize)]
pub struct WorkParams {
    /// Work duration in milliseconds.
    pub millis: Option<u64>,
}

/// GET /jsonp query parameters.
#[derive(Debug, Deserialize)]
pub struct JsonpParams {
    pub callback: Option<String>,
}
