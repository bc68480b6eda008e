use crate::error::CurlError;
use crate::http::{Connection, RequestSpec, ResponseHandler, build_request};
use crate::output::Logger;
use crate::types::Scheme;
use crate::validate::{validate_body, validate_method};

/// Validate the inputs, write the request and stream the response.
///
/// Every validation failure is logged and returned before a socket is
/// opened. Socket failures are logged by the connection itself.
pub async fn run(
    url: &str,
    method: Option<&str>,
    body: Option<&str>,
    headers: &[String],
    logger: &dyn Logger,
) -> Result<(), CurlError> {
    let (spec, wire) = match prepare_request(url, method, body, headers) {
        Ok(prepared) => prepared,
        Err(e) => {
            logger.error(&e.to_string());
            return Err(e);
        }
    };
    if spec.scheme() == Scheme::Https {
        logger.warn(&format!(
            "https is not encrypted, sending plaintext HTTP to port {}",
            spec.port()
        ));
    }
    logger.debug(&wire);

    let mut handler = ResponseHandler::new(logger);
    let mut connection = Connection::new(spec.hostname(), spec.port(), logger);
    connection.open(wire.as_bytes(), &mut handler).await
}

/// Everything up to the first byte on the wire
pub fn prepare_request(
    url: &str,
    method: Option<&str>,
    body: Option<&str>,
    headers: &[String],
) -> Result<(RequestSpec, String), CurlError> {
    let method = validate_method(method)?;
    validate_body(body, method)?;
    let spec = RequestSpec::new(url, method, body, headers)?;
    let wire = build_request(&spec)?;
    Ok((spec, wire))
}
