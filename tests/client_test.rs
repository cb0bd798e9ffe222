extern crate geth_connector;
extern crate mockito;
extern crate serde_json;

use geth_connector::rpc::Error;
use geth_connector::{NodeConfig, RpcClient, Wei};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const ADDRESS: &str = "0x0e7c045110b8dbf29765047380898919c5cb56f4";
const OTHER_ADDRESS: &str = "0x13978aee95f38490e9769c39b2773ed763d9cd5f";

#[test]
fn should_get_balance() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "jsonrpc": "2.0",
                "method": "eth_getBalance",
                "params": [ADDRESS, "latest"],
            })),
            Matcher::Regex("\"id\":\\d+".to_string()),
        ]))
        .with_header("content-type", "application/json")
        .with_body("{\"result\":\"0x1\"}")
        .create();

    let balance = client(&server).get_balance(&ADDRESS.parse().unwrap()).unwrap();

    mock.assert();
    assert_eq!(balance, Wei::from(1u64));
}

#[test]
fn should_classify_authentication_needed() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body("{\"error\":{\"code\":-32000,\"message\":\"authentication needed\"}}")
        .create();

    let err = client(&server)
        .unlock_account(&ADDRESS.parse().unwrap(), "wrong", 300)
        .unwrap_err();

    assert!(err.is_authentication_needed());
    match err {
        Error::AuthenticationNeeded(message) => assert_eq!(message, "authentication needed"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn should_classify_remote_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body("{\"error\":{\"code\":-32601,\"message\":\"method not found\"}}")
        .create();

    let err = client(&server).get_version().unwrap_err();

    assert!(!err.is_authentication_needed());
    match err {
        Error::Remote(code, message) => {
            assert_eq!(code, -32601);
            assert_eq!(message, "method not found");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn should_fail_on_non_200_status_without_reading_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_status(500)
        .with_body("{\"error\":{\"code\":-32601,\"message\":\"ignored\"}}")
        .create();

    let err = client(&server).get_version().unwrap_err();

    match err {
        Error::UnexpectedHttpStatus(status, endpoint) => {
            assert_eq!(status, 500);
            assert!(endpoint.contains("http://127.0.0.1:"));
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn should_fail_on_body_that_is_not_a_reply() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "text/html")
        .with_body("<html>gateway</html>")
        .create();

    let err = client(&server).get_version().unwrap_err();

    match err {
        Error::InvalidDataFormat(message) => assert!(message.contains("<html>")),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn should_get_version() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "jsonrpc": "2.0",
            "method": "net_version",
            "params": [],
        })))
        .with_header("content-type", "application/json")
        .with_body("{\"result\":\"1\"}")
        .create();

    let version = client(&server).get_version().unwrap();

    mock.assert();
    assert_eq!(version, "1");
}

#[test]
fn should_catch_version_that_is_not_a_string() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body("{\"result\":42}")
        .create();

    assert!(matches!(
        client(&server).get_version(),
        Err(Error::InvalidDataFormat(_))
    ));
}

#[test]
fn should_unlock_account() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "personal_unlockAccount",
            "params": [ADDRESS, "secret", 300],
        })))
        .with_header("content-type", "application/json")
        .with_body("{\"result\":true}")
        .create();

    client(&server)
        .unlock_account(&ADDRESS.parse().unwrap(), "secret", 300)
        .unwrap();

    mock.assert();
}

#[test]
fn should_send_transaction() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "method": "eth_sendTransaction",
            "params": [{
                "from": ADDRESS,
                "to": OTHER_ADDRESS,
                "value": "0x14d1120d7b160000",
            }],
        })))
        .with_header("content-type", "application/json")
        .with_body("{\"result\":\"0xc0ffee\"}")
        .create();

    let tx = client(&server)
        .send_transaction(
            &ADDRESS.parse().unwrap(),
            &OTHER_ADDRESS.parse().unwrap(),
            &Wei::from(1_500_000_000_000_000_000u64),
        )
        .unwrap();

    mock.assert();
    assert_eq!(tx.id, Some("0xc0ffee".to_string()));
    assert_eq!(tx.from.to_string(), ADDRESS);
    assert_eq!(tx.to.to_string(), OTHER_ADDRESS);
    assert_eq!(tx.value, Wei::from(1_500_000_000_000_000_000u64));
}

#[test]
fn should_decode_large_balance() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/")
        .with_header("content-type", "application/json")
        .with_body("{\"result\":\"0xffffffffffffffffffffffffffffffffff\"}")
        .create();

    let balance = client(&server).get_balance(&ADDRESS.parse().unwrap()).unwrap();

    assert_eq!(balance.to_hex(), "0xffffffffffffffffffffffffffffffffff");
}

fn client(server: &ServerGuard) -> RpcClient {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .split_once(':')
        .expect("expect host:port from stub server");

    RpcClient::new(NodeConfig::new(host, port.parse().unwrap()))
}
