pub mod health;
pub mod invoke;
pub mod lookup;

pub use health::health_check;
pub use invoke::invoke;
pub use lookup::{lookup, parse_request, process_lookup};
