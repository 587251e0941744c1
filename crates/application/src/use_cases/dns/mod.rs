pub mod dispatch;
pub mod nssearch;
pub mod trace;

pub use dispatch::DispatchQueryUseCase;
pub use nssearch::NsSearchUseCase;
pub use trace::{harvest_glue, TraceDomainUseCase, TraceReport, TraceStep};
