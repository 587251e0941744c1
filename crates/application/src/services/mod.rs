pub mod response_code;
pub mod rrset;
pub mod stub_resolver;

pub use response_code::rcode_mnemonic;
pub use rrset::{group_rrsets, render_rdata, render_rrset};
pub use stub_resolver::{ResolvedAnswer, StubResolver};
