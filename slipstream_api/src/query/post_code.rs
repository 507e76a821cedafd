use std::fmt;

/// Searchable fields of a postal-code record, mapped to their wire names.
/// `Prefecture` uses the abbreviated wire name `PREF`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostCodeField {
    Code,
    Prefecture,
    City,
    Town,
}

impl fmt::Display for PostCodeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PostCodeField::Code => "POST_CODE",
                PostCodeField::Prefecture => "PREF",
                PostCodeField::City => "CITY",
                PostCodeField::Town => "TOWN",
            }
        )
    }
}
