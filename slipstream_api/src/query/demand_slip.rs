use std::fmt;

/// Searchable fields of a demand slip, mapped to their wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemandSlipField {
    DoCode,
    CustomerCode,
    CustomerName,
    SlipDate,
    DueDate,
    Status,
    TotalAmount,
}

impl fmt::Display for DemandSlipField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                DemandSlipField::DoCode => "DO_CODE",
                DemandSlipField::CustomerCode => "CUSTOMER_CODE",
                DemandSlipField::CustomerName => "CUSTOMER_NAME",
                DemandSlipField::SlipDate => "SLIP_DATE",
                DemandSlipField::DueDate => "DUE_DATE",
                DemandSlipField::Status => "STATUS",
                DemandSlipField::TotalAmount => "TOTAL_AMOUNT",
            }
        )
    }
}
