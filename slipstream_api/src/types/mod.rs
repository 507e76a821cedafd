mod meta;
pub use self::meta::ListResponse;

mod ping;
pub use self::ping::Pong;

mod post_code;
pub use self::post_code::PostCode;

mod demand_slip;
pub use self::demand_slip::{DemandSlip, NewDemandSlip};

mod arp;
pub use self::arp::Arp;

mod transaction;
pub use self::transaction::TransactionDetail;
