use std::fmt;

/// Searchable fields of a transaction detail line, mapped to their wire
/// names. `Quantity` uses the abbreviated wire name `QTY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionDetailField {
    LineNo,
    ItemCode,
    ItemName,
    Quantity,
    UnitPrice,
    Amount,
}

impl fmt::Display for TransactionDetailField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TransactionDetailField::LineNo => "LINE_NO",
                TransactionDetailField::ItemCode => "ITEM_CODE",
                TransactionDetailField::ItemName => "ITEM_NAME",
                TransactionDetailField::Quantity => "QTY",
                TransactionDetailField::UnitPrice => "UNIT_PRICE",
                TransactionDetailField::Amount => "AMOUNT",
            }
        )
    }
}
