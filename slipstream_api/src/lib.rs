mod client;
mod errors;
mod query;
pub mod types;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    ArpField, DemandSlipField, FieldValue, OperatorSet, ParamValue, PostCodeField, QueryOptions,
    Scalar, SearchCriteria, SortDirection, SortSpec, TransactionDetailField,
};
