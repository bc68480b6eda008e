/// HTTP constants
pub const HTTP_VERSION_1_1: &str = "HTTP/1.1";
pub const CRLF: &str = "\r\n";
pub const HEADER_BODY_DELIMITER: &str = "\r\n\r\n";

/// Standard request headers, sent with every request
pub const ACCEPT_HEADER: &str = "Accept: */*";
pub const CONNECTION_HEADER: &str = "Connection: close";

/// Header name prefixes
pub const CONTENT_TYPE_PREFIX: &str = "Content-Type";
pub const CONTENT_LENGTH_NAME: &str = "content-Length";

/// HTTP methods
pub const ACCEPTED_METHODS: [&str; 4] = ["GET", "DELETE", "PUT", "POST"];
pub const BODY_ALLOWED_METHODS: [&str; 2] = ["POST", "PUT"];

/// URL schemes
pub const ACCEPTED_SCHEMES: [&str; 2] = ["http", "https"];
pub const HTTP_PORT: u16 = 80;
pub const HTTPS_PORT: u16 = 443;

/// Socket read buffer size in bytes
pub const READ_BUFFER_SIZE: usize = 64 * 1024;
