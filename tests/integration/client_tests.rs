use crate::common;
use mockito::Matcher;
use reqwest::Method;
use strutta_client::prelude::*;

const OK_BODY: &str = "<response><status>ok</status></response>";

#[tokio::test]
async fn get_appends_parameters_as_path_segments() {
    let mut server = mockito::Server::new_async().await;
    let secret = common::test_secret("test", "echo");
    let mock = server
        .mock(
            "GET",
            format!("/test/echo/apikey/K/authsecret/{secret}/foo/bar").as_str(),
        )
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let mut params = Params::new();
    params.insert("foo".to_string(), "bar".to_string());

    let doc = client.get("test/echo", params).await.unwrap();
    assert_eq!(doc.child_text("status"), Some("ok"));
    mock.assert_async().await;
}

#[tokio::test]
async fn get_percent_encodes_parameter_values() {
    let mut server = mockito::Server::new_async().await;
    let secret = common::test_secret("test", "echo");
    let mock = server
        .mock(
            "GET",
            format!("/test/echo/apikey/K/authsecret/{secret}/q/fish%20%26%20chips").as_str(),
        )
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let mut params = Params::new();
    params.insert("q".to_string(), "fish & chips".to_string());

    client.get(("test", "echo"), params).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn post_sends_parameters_as_form_body_with_bare_url() {
    let mut server = mockito::Server::new_async().await;
    let secret = common::test_secret("test", "echo");
    let expected_body = format!("apikey=K&authsecret={secret}&foo=bar");
    let mock = server
        .mock("POST", "/test/echo")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::Exact(expected_body))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let mut params = Params::new();
    params.insert("foo".to_string(), "bar".to_string());

    client.post(("test", "echo"), params).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn put_sends_parameters_like_post() {
    let mut server = mockito::Server::new_async().await;
    let secret = common::test_secret("games", "update");
    let expected_body = format!("apikey=K&authsecret={secret}&name=Renamed");
    let mock = server
        .mock("PUT", "/games/update")
        .match_body(Matcher::Exact(expected_body))
        .with_status(200)
        .with_body(OK_BODY)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let mut params = Params::new();
    params.insert("name".to_string(), "Renamed".to_string());

    client.put("games/update", params).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn verbs_outside_the_api_are_rejected_locally() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client
        .call("test/echo", Params::new(), Method::DELETE)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::UnsupportedMethod(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn malformed_call_path_is_rejected_locally() {
    let client = common::test_client("http://localhost:1");
    let err = client
        .get("not-a-real-path", Params::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::MalformedPath(_)));
}

#[tokio::test]
async fn http_error_status_maps_to_transport_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex("^/test/echo/".to_string()))
        .with_status(503)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.get("test/echo", Params::new()).await.unwrap_err();
    match err {
        AppError::Transport { status, reason } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(reason, "Service Unavailable");
        }
        other => panic!("expected Transport, got {other:?}"),
    }
}

#[tokio::test]
async fn unparseable_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex("^/test/echo/".to_string()))
        .with_status(200)
        .with_body("this is not xml")
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.get("test/echo", Params::new()).await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn error_document_maps_to_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", Matcher::Regex("^/games/show/".to_string()))
        .with_status(200)
        .with_body(
            "<response><errorcode>212</errorcode><errormessage>Unknown game</errormessage></response>",
        )
        .create_async()
        .await;

    let client = common::test_client(&server.url());
    let err = client.get("games/show", Params::new()).await.unwrap_err();
    match err {
        AppError::Api { code, message } => {
            assert_eq!(code, 212);
            assert_eq!(message, "Unknown game");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}
