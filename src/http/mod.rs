pub mod connection;
pub mod request;
pub mod response;

pub use connection::{Connection, ConnectionState};
pub use request::{RequestSpec, build_request, build_request_lines, serialize_request};
pub use response::{ResponseFrame, ResponseHandler};
