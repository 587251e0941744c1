#![allow(unused_imports)]

mod builders;
mod mock_ports;

pub use builders::*;
pub use mock_ports::*;
