pub mod envelope;
pub mod health;
pub mod lookup;

pub use envelope::{InvocationEvent, InvocationResponse};
pub use health::HealthResponse;
pub use lookup::{DomainResultDto, NameserverResultDto};
