pub mod coerce;
pub mod frame;
pub mod router;

pub use coerce::{FormatError, parse_optional_f64, parse_optional_i64};
pub use frame::route_frame;
pub use router::{TransformError, build_clean_record, route_batch};
