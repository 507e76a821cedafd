use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A billing slip issued against a customer account.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DemandSlip {
    pub do_code: String,

    pub customer_code: String,

    pub customer_name: Option<String>,

    pub slip_date: NaiveDate,

    pub due_date: Option<NaiveDate>,

    pub status: i64,

    pub total_amount: i64,

    pub tax_amount: Option<i64>,

    pub created_at: Option<DateTime<Utc>>,

    memo: Option<String>,
}

/// Payload for creating or replacing a demand slip.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NewDemandSlip {
    pub customer_code: String,

    pub slip_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    pub total_amount: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
