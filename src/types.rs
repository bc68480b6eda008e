use clap::Parser;
use std::fmt;

use crate::constants::{BODY_ALLOWED_METHODS, HTTP_PORT, HTTPS_PORT};

/// CLI arguments structure
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target URL (e.g., "http://example.com/foo").
    pub url: String,

    // HTTP
    /// HTTP method: GET, DELETE, PUT or POST.
    #[arg(short = 'X', long, help_heading = "HTTP")]
    pub method: Option<String>,

    /// Request payload, only accepted for POST and PUT.
    #[arg(short = 'd', long, help_heading = "HTTP")]
    pub body: Option<String>,

    /// Custom headers to add to the request (e.g., "Content-Type: application/json").
    #[arg(short = 'H', long = "header", num_args = 1.., help_heading = "HTTP")]
    pub headers: Vec<String>,

    // OUTPUT
    /// Also print response headers and the raw request.
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Disable color output.
    #[arg(long, help_heading = "OUTPUT")]
    pub no_color: bool,
}

/// Methods the request builder knows how to write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Delete,
    Put,
    Post,
}

impl HttpMethod {
    /// Exact, case-sensitive lookup of a method token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "GET" => Some(HttpMethod::Get),
            "DELETE" => Some(HttpMethod::Delete),
            "PUT" => Some(HttpMethod::Put),
            "POST" => Some(HttpMethod::Post),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
        }
    }

    pub fn allows_body(&self) -> bool {
        BODY_ALLOWED_METHODS.contains(&self.as_str())
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// URL schemes accepted on the command line. Both are sent as plaintext.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Http => HTTP_PORT,
            Scheme::Https => HTTPS_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_tokens_are_case_sensitive() {
        assert_eq!(HttpMethod::from_token("POST"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::from_token("post"), None);
        assert_eq!(HttpMethod::from_token("PATCH"), None);
    }

    #[test]
    fn test_only_post_and_put_allow_body() {
        assert!(HttpMethod::Post.allows_body());
        assert!(HttpMethod::Put.allows_body());
        assert!(!HttpMethod::Get.allows_body());
        assert!(!HttpMethod::Delete.allows_body());
    }

    #[test]
    fn test_scheme_default_ports() {
        assert_eq!(Scheme::Http.default_port(), 80);
        assert_eq!(Scheme::Https.default_port(), 443);
    }

    #[test]
    fn test_cli_parses_repeated_headers() {
        let cli = Cli::parse_from([
            "edly-curl",
            "-X",
            "POST",
            "-d",
            "{}",
            "-H",
            "Content-Type: application/json",
            "-H",
            "X-Trace: 1",
            "-v",
            "http://example.com/items",
        ]);
        assert_eq!(cli.url, "http://example.com/items");
        assert_eq!(cli.method.as_deref(), Some("POST"));
        assert_eq!(cli.body.as_deref(), Some("{}"));
        assert_eq!(cli.headers, vec!["Content-Type: application/json", "X-Trace: 1"]);
        assert!(cli.verbose);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_cli_parses_several_values_after_one_header_flag() {
        let cli = Cli::parse_from([
            "edly-curl",
            "http://example.com/items",
            "-X",
            "POST",
            "-d",
            "{}",
            "-H",
            "Content-Type: application/json",
            "X-A: 1",
        ]);
        assert_eq!(cli.url, "http://example.com/items");
        assert_eq!(cli.headers, vec!["Content-Type: application/json", "X-A: 1"]);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["edly-curl", "http://example.com"]);
        assert_eq!(cli.method, None);
        assert_eq!(cli.body, None);
        assert!(cli.headers.is_empty());
        assert!(!cli.verbose);
    }
}
