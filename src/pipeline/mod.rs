//! The compiled form: step definitions exchanged with the pipeline service.

pub mod reference;
pub mod topo;
pub mod types;

pub use topo::{find_cycle, sort};
pub use types::*;
