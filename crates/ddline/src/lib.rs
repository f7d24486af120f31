//! Top-level facade crate for ddline.
//!
//! Re-exports the wire contract and the client so users can depend on a single crate.

pub mod core {
    pub use ddline_core::*;
}

pub mod client {
    pub use ddline_client::*;
}

pub use ddline_client::{Client, ClientBuilder, ClientConfig};
pub use ddline_core::{DdlineError, Result};
