use serde::{Deserialize, Serialize};

/// Envelope returned by every list endpoint.
///
/// `TOTAL_COUNT` is present only when the request asked for `count=true`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ListResponse<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}
