pub mod use_connectivity;

pub use use_connectivity::*;
