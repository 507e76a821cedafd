use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PostCode {
    pub post_code: String,

    pub pref: String,

    pub city: String,

    pub town: Option<String>,
}
