//! Server Command Wrappers
//!
//! Frontend bindings to the treasure site's HTTP endpoints.

mod like;

pub use like::*;
