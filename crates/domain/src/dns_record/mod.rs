pub mod record_type;

pub use record_type::{RecordType, RequestedType, DEFAULT_TYPE_SENTINEL};
