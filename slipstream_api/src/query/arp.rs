use std::fmt;

/// Searchable fields of an accounts-receivable payment, mapped to their
/// wire names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArpField {
    ArpCode,
    CustomerCode,
    DepositDate,
    Amount,
    Status,
}

impl fmt::Display for ArpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ArpField::ArpCode => "ARP_CODE",
                ArpField::CustomerCode => "CUSTOMER_CODE",
                ArpField::DepositDate => "DEPOSIT_DATE",
                ArpField::Amount => "AMOUNT",
                ArpField::Status => "STATUS",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::query::SearchCriteria;

    use super::ArpField;

    #[test]
    fn test_arp_criteria() {
        let filter = SearchCriteria::new()
            .field(ArpField::Status, vec![1, 2, 3])
            .build();
        assert_eq!(
            filter.as_deref(),
            Some("(STATUS eq 1 or STATUS eq 2 or STATUS eq 3)")
        );
    }
}
