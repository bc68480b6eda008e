use url::{Host, Url};

use crate::constants::{
    ACCEPT_HEADER, CONNECTION_HEADER, CONTENT_LENGTH_NAME, CRLF, HEADER_BODY_DELIMITER,
    HTTP_VERSION_1_1,
};
use crate::error::CurlError;
use crate::types::{HttpMethod, Scheme};
use crate::validate::{check_for_body, check_for_content_type, validate_scheme};

/// Everything needed to write one request, fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    host: String,
    hostname: String,
    port: u16,
    pathname: String,
    scheme: Scheme,
    method: HttpMethod,
    body: Option<String>,
    headers: Vec<String>,
}

impl RequestSpec {
    /// Parse the target URL and pair it with an already validated method.
    ///
    /// An explicit port in the URL wins over the scheme default and is kept
    /// in the `Host` value. A body is only kept for POST and PUT.
    pub fn new(
        url: &str,
        method: HttpMethod,
        body: Option<&str>,
        headers: &[String],
    ) -> Result<Self, CurlError> {
        let parsed = Url::parse(url)?;
        let scheme = validate_scheme(parsed.scheme())?;
        // IPv6 literals keep their brackets in `Host` but not in the connect target.
        let (hostname, host_text) = match parsed.host() {
            Some(Host::Domain(domain)) if !domain.is_empty() => {
                (domain.to_string(), domain.to_string())
            }
            Some(Host::Ipv4(addr)) => (addr.to_string(), addr.to_string()),
            Some(Host::Ipv6(addr)) => (addr.to_string(), format!("[{}]", addr)),
            _ => return Err(CurlError::InvalidUrl(format!("{} has no host", url))),
        };

        let (host, port) = match parsed.port() {
            Some(port) => (format!("{}:{}", host_text, port), port),
            None => (host_text, scheme.default_port()),
        };

        Ok(Self {
            host,
            hostname,
            port,
            pathname: parsed.path().to_string(),
            scheme,
            method,
            body: body.filter(|_| method.allows_body()).map(str::to_string),
            headers: headers.to_vec(),
        })
    }

    /// Value of the `Host` header
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Name to connect to, without the port
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

/// Assemble the request lines in wire order.
///
/// POST and PUT must carry a body and a `Content-Type` line; both are checked
/// against the lines built so far before the length line, the blank line and
/// the body are appended.
pub fn build_request_lines(spec: &RequestSpec) -> Result<Vec<String>, CurlError> {
    let mut lines = vec![
        format!("{} {} {}", spec.method, spec.pathname, HTTP_VERSION_1_1),
        format!("Host: {}", spec.host),
        ACCEPT_HEADER.to_string(),
        CONNECTION_HEADER.to_string(),
    ];
    lines.extend(spec.headers.iter().cloned());

    if spec.method.allows_body() {
        check_for_body(spec.body())?;
        check_for_content_type(&lines)?;
        let body = spec.body().unwrap_or_default();
        lines.push(format!("{}: {}", CONTENT_LENGTH_NAME, body.len()));
        lines.push(String::new());
        lines.push(body.to_string());
    }

    Ok(lines)
}

/// Join request lines with CRLF and terminate with an empty line
pub fn serialize_request<S: AsRef<str>>(lines: &[S]) -> String {
    let joined = lines
        .iter()
        .map(|line| line.as_ref())
        .collect::<Vec<_>>()
        .join(CRLF);
    format!("{}{}", joined, HEADER_BODY_DELIMITER)
}

/// Build and serialize in one step
pub fn build_request(spec: &RequestSpec) -> Result<String, CurlError> {
    let lines = build_request_lines(spec)?;
    Ok(serialize_request(&lines))
}
