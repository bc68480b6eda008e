use crate::constants::CONTENT_TYPE_PREFIX;
use crate::error::CurlError;
use crate::types::{HttpMethod, Scheme};

/// Resolve the method token, defaulting to GET when none was given
pub fn validate_method(method: Option<&str>) -> Result<HttpMethod, CurlError> {
    let token = method.unwrap_or("GET");
    HttpMethod::from_token(token).ok_or_else(|| CurlError::BadHttpMethod(token.to_string()))
}

/// Reject a non-empty body on methods that do not carry one
pub fn validate_body(body: Option<&str>, method: HttpMethod) -> Result<(), CurlError> {
    if has_content(body) && !method.allows_body() {
        return Err(CurlError::BodyNotAllowedMethod(method.to_string()));
    }
    Ok(())
}

/// Accepts the bare scheme name as well as the `http:` form
pub fn validate_scheme(scheme: &str) -> Result<Scheme, CurlError> {
    let name = scheme.strip_suffix(':').unwrap_or(scheme);
    match name {
        "http" => Ok(Scheme::Http),
        "https" => Ok(Scheme::Https),
        _ => Err(CurlError::UnrecognisableProtocol(scheme.to_string())),
    }
}

/// Require a line starting with `Content-Type` (case-sensitive)
pub fn check_for_content_type<S: AsRef<str>>(lines: &[S]) -> Result<(), CurlError> {
    if lines
        .iter()
        .any(|line| line.as_ref().starts_with(CONTENT_TYPE_PREFIX))
    {
        Ok(())
    } else {
        Err(CurlError::NoContentTypeHeader)
    }
}

pub fn check_for_body(body: Option<&str>) -> Result<(), CurlError> {
    if has_content(body) {
        Ok(())
    } else {
        Err(CurlError::NoBodyError)
    }
}

fn has_content(body: Option<&str>) -> bool {
    body.is_some_and(|b| !b.is_empty())
}
