use serde::{Deserialize, Serialize};

/// A single detail line of a transaction.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct TransactionDetail {
    pub tx_id: i64,

    pub line_no: i64,

    pub item_code: String,

    pub item_name: Option<String>,

    pub qty: i64,

    pub unit_price: i64,

    pub amount: i64,
}
