use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An accounts-receivable payment recorded against a customer.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Arp {
    pub arp_code: String,

    pub customer_code: String,

    pub deposit_date: NaiveDate,

    pub amount: i64,

    pub status: i64,

    memo: Option<String>,
}
