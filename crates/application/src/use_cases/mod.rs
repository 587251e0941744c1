pub mod dns;
pub mod lookup;

pub use dns::{DispatchQueryUseCase, NsSearchUseCase, TraceDomainUseCase};
pub use lookup::HandleLookupUseCase;
