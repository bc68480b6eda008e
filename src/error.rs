//! Error types for request construction and transport.
//!
//! Every failure the tool can hit is one variant of `CurlError`. Validation
//! variants are produced before any socket is opened; `SocketConnectionError`
//! is produced after the connection has already been shut down.

use std::fmt;
use std::io;

use crate::constants::{ACCEPTED_METHODS, ACCEPTED_SCHEMES};

#[derive(Debug)]
pub enum CurlError {
    /// The URL scheme is neither `http` nor `https`.
    UnrecognisableProtocol(String),

    /// The method is not one of GET, DELETE, PUT, POST.
    BadHttpMethod(String),

    /// A body was given for a method that does not carry one.
    BodyNotAllowedMethod(String),

    /// POST or PUT without a `Content-Type` header line.
    NoContentTypeHeader,

    /// POST or PUT without a body.
    NoBodyError,

    /// The URL could not be parsed or has no host.
    InvalidUrl(String),

    /// Any failure on the TCP connection.
    SocketConnectionError(io::Error),
}

impl fmt::Display for CurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurlError::UnrecognisableProtocol(scheme) => {
                write!(
                    f,
                    "edly-curl only supports {}, {scheme} provided",
                    ACCEPTED_SCHEMES.join(",")
                )
            }
            CurlError::BadHttpMethod(method) => {
                write!(
                    f,
                    "method: {method} unsupported, supported methods {}",
                    ACCEPTED_METHODS.join(",")
                )
            }
            CurlError::BodyNotAllowedMethod(method) => {
                write!(f, "body provided for unsupported method type {method}")
            }
            CurlError::NoContentTypeHeader => write!(f, "No Content-Type header has been supplied"),
            CurlError::NoBodyError => write!(f, "no body has been supplied"),
            CurlError::InvalidUrl(reason) => write!(f, "invalid url: {reason}"),
            CurlError::SocketConnectionError(e) => write!(f, "socket connection error: {e}"),
        }
    }
}

impl std::error::Error for CurlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CurlError::SocketConnectionError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CurlError {
    fn from(e: io::Error) -> Self {
        CurlError::SocketConnectionError(e)
    }
}

impl From<url::ParseError> for CurlError {
    fn from(e: url::ParseError) -> Self {
        CurlError::InvalidUrl(e.to_string())
    }
}
