mod options;
pub use self::options::{ParamValue, QueryOptions, SortDirection, SortSpec};

mod filter;
pub use self::filter::{FieldValue, OperatorSet, Scalar, SearchCriteria};

mod arp;
pub use self::arp::ArpField;

mod demand_slip;
pub use self::demand_slip::DemandSlipField;

mod post_code;
pub use self::post_code::PostCodeField;

mod transaction;
pub use self::transaction::TransactionDetailField;
