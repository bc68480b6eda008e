//! Runs the built binary to check what a failing invocation prints.

use std::process::Command;

fn edly_curl(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_edly-curl"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn validation_failure_prints_one_error_line_and_exits_non_zero() {
    let output = edly_curl(&["--no-color", "-X", "PATCH", "http://127.0.0.1:1/"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[Error] method: PATCH unsupported, supported methods GET,DELETE,PUT,POST\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_content_type_is_reported_once() {
    let output = edly_curl(&[
        "--no-color",
        "http://127.0.0.1:1/",
        "-X",
        "POST",
        "-d",
        "{}",
        "-H",
        "X-A: 1",
        "X-B: 2",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert_eq!(stderr, "[Error] No Content-Type header has been supplied\n");
}

#[test]
fn refused_connection_prints_one_error_line() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = format!("http://127.0.0.1:{port}/");
    let output = edly_curl(&["--no-color", &url]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.starts_with("[Error] Error: "));
}
