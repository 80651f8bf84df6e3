use std::time::Duration;

use httpmock::prelude::*;
use stronkpass::breach::{BreachChecker, BreachStatus, PwnedPasswordsClient};

const PASSWORD_SUFFIX: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8";

fn client(server: &MockServer) -> PwnedPasswordsClient {
    PwnedPasswordsClient::new(&server.base_url(), Duration::from_secs(2)).unwrap()
}

#[test]
fn sends_prefix_with_padding_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/range/5BAA6")
            .header("Add-Padding", "true");
        then.status(200).body(format!(
            "0018A45C4D1DEF81644B54AB7F969B88D65:0\r\n{}:9545824\r\n",
            PASSWORD_SUFFIX
        ));
    });

    assert_eq!(client(&server).check("password"), BreachStatus::Breached(9545824));
    mock.assert();
}

#[test]
fn absent_suffix_is_clean() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/range/5BAA6");
        then.status(200)
            .body("0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n00D4F6E8FA6EECAD2A3AA415EEC418D38EC:0\r\n");
    });

    assert_eq!(client(&server).check("password"), BreachStatus::Clean);
}

#[test]
fn padding_entry_is_clean() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/range/5BAA6");
        then.status(200).body(format!("{}:0\r\n", PASSWORD_SUFFIX));
    });

    assert_eq!(client(&server).check("password"), BreachStatus::Clean);
}

#[test]
fn server_error_is_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/range/");
        then.status(503);
    });

    assert_eq!(
        client(&server).check("password"),
        BreachStatus::Unknown("API error: HTTP 503".into())
    );
}

#[test]
fn malformed_body_is_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/range/");
        then.status(200).body("<html>maintenance</html>");
    });

    assert!(matches!(
        client(&server).check("password"),
        BreachStatus::Unknown(_)
    ));
}

#[test]
fn empty_body_is_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/range/");
        then.status(200).body("");
    });

    assert_eq!(
        client(&server).check("password"),
        BreachStatus::Unknown("empty range response".into())
    );
}

#[test]
fn slow_service_times_out_as_unknown() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path_contains("/range/");
        then.status(200).delay(Duration::from_secs(2)).body("");
    });

    let client = PwnedPasswordsClient::new(&server.base_url(), Duration::from_millis(200)).unwrap();
    assert_eq!(
        client.check("password"),
        BreachStatus::Unknown("API timeout".into())
    );
}
