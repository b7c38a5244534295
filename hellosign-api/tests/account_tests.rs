mod common;

use std::time::Duration;

use common::{client_for, client_with_timeout, error_body, setup_mock_server, AUTHORIZATION};
use hellosign_api::{Account, AccountDetail, AccountQuotas, Client, ClientConfig, Error};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn get_account_decodes_partial_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {"account_id": "abc"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server).account().get().await.unwrap();
    assert_eq!(
        account,
        Account {
            account: AccountDetail {
                account_id: "abc".to_string(),
                ..Default::default()
            },
            warnings: vec![],
        }
    );
}

#[tokio::test]
async fn get_account_not_found() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(error_body("not_found", "User not found for ID 1")),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).account().get().await.unwrap_err();
    assert_eq!(err.to_string(), "not_found: User not found for ID 1");
    assert_eq!(err.api_error_name(), Some("not_found"));
}

#[tokio::test]
async fn get_account_unauthorized() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(error_body("unauthorized", "Unauthorized api key")),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).account().get().await.unwrap_err();
    assert_eq!(err.to_string(), "unauthorized: Unauthorized api key");
}

#[tokio::test]
async fn get_account_twice_is_identical() {
    let server = setup_mock_server().await;
    let expected = Account {
        account: AccountDetail {
            account_id: "5008b25c7f67153e57d5a357b1687968068fb465".to_string(),
            email_address: "me@hellosign.com".to_string(),
            is_paid_hellosign: true,
            quotas: AccountQuotas {
                api_signature_requests_left: Some(1250),
                documents_left: None,
                templates_left: Some(5),
            },
            callback_url: Some("https://example.com/callback".to_string()),
            ..Default::default()
        },
        warnings: vec![],
    };
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let first = client.account().get().await.unwrap();
    let second = client.account().get().await.unwrap();
    assert_eq!(first, expected);
    assert_eq!(first, second);
}

#[tokio::test]
async fn concurrent_gets_on_cloned_client_agree() {
    let server = setup_mock_server().await;
    let expected = Account {
        account: AccountDetail {
            account_id: "5008b25c7f67153e57d5a357b1687968068fb465".to_string(),
            email_address: "me@hellosign.com".to_string(),
            ..Default::default()
        },
        warnings: vec![],
    };
    Mock::given(method("GET"))
        .and(path("/account"))
        .and(header("authorization", AUTHORIZATION))
        .respond_with(ResponseTemplate::new(200).set_body_json(&expected))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cloned = client.clone();
    let first_account = client.account();
    let second_account = cloned.account();
    let (first, second) = tokio::join!(first_account.get(), second_account.get());
    let (first, second) = (first.unwrap(), second.unwrap());
    assert_eq!(first, expected);
    assert_eq!(first, second);
}

#[tokio::test]
async fn update_account_sends_callback_url() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/account"))
        .and(header("authorization", AUTHORIZATION))
        .and(body_string_contains("name=\"callback_url\""))
        .and(body_string_contains("https://www.example.com/callback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "account_id": "abc",
                "callback_url": "https://www.example.com/callback"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server)
        .account()
        .update("https://www.example.com/callback")
        .await
        .unwrap();
    assert_eq!(
        account.account.callback_url.as_deref(),
        Some("https://www.example.com/callback")
    );
}

#[tokio::test]
async fn create_account_posts_email() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/account/create"))
        .and(body_string_contains("newuser@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {"account_id": "new", "email_address": "newuser@example.com"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let account = client_for(&server)
        .account()
        .create("newuser@example.com")
        .await
        .unwrap();
    assert_eq!(account.account.email_address, "newuser@example.com");
}

#[tokio::test]
async fn create_account_already_exists() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/account/create"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            "bad_request",
            "Account already exists",
        )))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .account()
        .create("me@hellosign.com")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "bad_request: Account already exists");
}

#[tokio::test]
async fn verify_unknown_account_is_empty() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/account/verify"))
        .and(body_string_contains("nobody@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let account = client_for(&server)
        .account()
        .verify("nobody@example.com")
        .await
        .unwrap();
    assert_eq!(account, Account::default());
}

#[tokio::test]
async fn error_status_without_envelope() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server).account().get().await.unwrap_err();
    match err {
        Error::UnexpectedStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "Service Unavailable");
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn success_with_invalid_json_is_json_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).account().get().await.unwrap_err();
    assert!(matches!(err, Error::JsonError { .. }));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/account"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"account": {}}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let err = client_with_timeout(&server, 1)
        .account()
        .get()
        .await
        .unwrap_err();
    match err {
        Error::NetworkError { source } => assert!(source.is_timeout()),
        other => panic!("expected NetworkError, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..ClientConfig::new("123")
    };
    let client = Client::new(config, reqwest::Client::new());

    let err = client.account().get().await.unwrap_err();
    assert!(matches!(err, Error::NetworkError { .. }));
}
