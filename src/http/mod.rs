//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the static file server and the order
//! API: MIME inference, conditional-request support, and response builders.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_413_response,
    build_options_response,
};
