use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of the `PING` endpoint.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Pong {
    pub status: String,
    pub server_time: DateTime<Utc>,
}
