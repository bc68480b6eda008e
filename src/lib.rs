//! Hand-written HTTP/1.1 requests over a raw TCP socket.
//!
//! The request is validated and assembled line by line, written once the
//! connection is up, and every inbound chunk is split into header and body
//! text for the injected [`output::Logger`].

pub mod constants;
pub mod error;
pub mod http;
pub mod output;
pub mod processor;
pub mod types;
pub mod validate;

pub use error::CurlError;
pub use processor::{prepare_request, run};
