#![allow(
    clippy::unwrap_used,
    reason = "Do not need additional syntax for setting up tests"
)]

mod common;

use deltadna_client::auth::{Credentials, ExposeSecret as _};
use deltadna_client::engage::types::EnvironmentName;
use deltadna_client::engage::{Client, Config};
use deltadna_client::error::{Kind, NotFound, Status, Synchronization};
use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::json;

use crate::common::{
    API_KEY, BAR_DEV, BEARER, FOO_DEV, FOO_LIVE, PASSWORD, create_authenticated, credentials,
};

#[tokio::test]
async fn authenticate_should_cache_environments() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server).await?;

    let environments = client.environments();
    assert_eq!(environments.len(), 3);
    assert_eq!(environments[0].game_name, "Foo");
    assert_eq!(environments[0].id, FOO_DEV);
    assert_eq!(environments[0].name, EnvironmentName::Dev);
    assert_eq!(environments[0].application_id, Some(100));
    assert_eq!(environments[1].id, FOO_LIVE);
    assert_eq!(environments[1].application_id, Some(100));
    assert_eq!(environments[2].application_id, Some(200));

    assert_eq!(client.application_id(BAR_DEV)?, 200);

    Ok(())
}

#[tokio::test]
async fn list_environments_should_render_table() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server).await?;

    let table = client.list_environments();

    assert_eq!(
        table.to_csv(),
        "Game Name,Environment ID,Environment Name,Application ID\n\
         Foo,101,Dev,100\n\
         Foo,102,Live,100\n\
         Bar,201,Dev,200\n"
    );

    Ok(())
}

#[tokio::test]
async fn authenticate_with_rejected_credentials_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();

    let auth = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate");
        then.status(StatusCode::UNAUTHORIZED)
            .json_body(json!({ "title": "Unauthorized", "status": 401 }));
    });
    let directory = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/");
        then.status(StatusCode::OK).json_body(json!([]));
    });

    let err = Client::new(&server.base_url(), Config::default())?
        .authenticate(Credentials::new(API_KEY, "wrong".to_owned()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::Status);
    let status = err.downcast_ref::<Status>().unwrap();
    assert_eq!(status.status_code, StatusCode::UNAUTHORIZED);
    assert_eq!(status.path, "/authentication/v1/authenticate");

    auth.assert();
    directory.assert_calls(0);

    Ok(())
}

#[tokio::test]
async fn authenticate_with_failing_directory_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate");
        then.status(StatusCode::OK)
            .json_body(json!({ "idToken": "id-token" }));
    });
    let directory = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/")
            .header("authorization", BEARER);
        then.status(StatusCode::INTERNAL_SERVER_ERROR)
            .body("boom");
    });

    let err = Client::new(&server.base_url(), Config::default())?
        .authenticate(credentials())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Kind::Status);
    let status = err.downcast_ref::<Status>().unwrap();
    assert_eq!(status.message, "boom");
    directory.assert();

    Ok(())
}

#[tokio::test]
async fn authenticate_should_propagate_network_errors() -> anyhow::Result<()> {
    let client = Client::new("http://127.0.0.1:1", Config::default())?;

    let err = client
        .authenticate(credentials())
        .await
        .expect_err("should fail with network error");

    assert_eq!(err.kind(), Kind::Internal);

    Ok(())
}

#[tokio::test]
async fn authenticate_should_send_configured_user_agent() -> anyhow::Result<()> {
    let server = MockServer::start();

    let auth = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate")
            .header("user-agent", "reporting-job/1.0")
            .header("content-type", "application/json");
        then.status(StatusCode::OK)
            .json_body(json!({ "idToken": "id-token" }));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/")
            .header("user-agent", "reporting-job/1.0");
        then.status(StatusCode::OK).json_body(json!([]));
    });

    let config = Config::builder().user_agent("reporting-job/1.0").build();
    let client = Client::new(&server.base_url(), config)?
        .authenticate(credentials())
        .await?;

    assert!(client.environments().is_empty(), "no environments expected");
    auth.assert();

    Ok(())
}

#[tokio::test]
async fn unknown_environment_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server).await?;

    let err = client.environment(999).unwrap_err();

    assert_eq!(err.kind(), Kind::NotFound);
    assert_eq!(
        err.downcast_ref::<NotFound>().unwrap(),
        &NotFound::Environment(999)
    );
    assert_eq!(
        err.downcast_ref::<NotFound>().unwrap().to_string(),
        "environment 999 not found in current API key"
    );

    Ok(())
}

#[tokio::test]
async fn refresh_should_replace_token_and_directory() -> anyhow::Result<()> {
    let server = MockServer::start();

    let mut first_auth = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate");
        then.status(StatusCode::OK)
            .json_body(json!({ "idToken": "id-token" }));
    });
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/")
            .header("authorization", BEARER);
        then.status(StatusCode::OK)
            .json_body(json!([{ "game": "Foo", "id": FOO_DEV, "name": "Dev" }]));
    });

    let mut client = Client::new(&server.base_url(), Config::default())?
        .authenticate(credentials())
        .await?;
    first_auth.assert();
    first_auth.delete();

    let auth = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate")
            .json_body(json!({ "key": API_KEY, "password": PASSWORD }));
        then.status(StatusCode::OK)
            .json_body(json!({ "idToken": "fresh-token" }));
    });
    let directory = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/")
            .header("authorization", "Bearer fresh-token");
        then.status(StatusCode::OK)
            .json_body(json!([{ "game": "Baz", "id": 302, "name": "Live" }]));
    });

    client.refresh().await?;

    auth.assert();
    directory.assert();
    assert_eq!(client.environments().len(), 1);
    assert_eq!(client.environments()[0].application_id, Some(300));
    assert_eq!(
        client.environment(FOO_DEV).unwrap_err().kind(),
        Kind::NotFound
    );

    Ok(())
}

#[tokio::test]
async fn refresh_with_shared_client_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();
    let mut client = create_authenticated(&server).await?;

    let _client_clone = client.clone();

    let err = client.refresh().await.unwrap_err();
    assert_eq!(err.kind(), Kind::Synchronization);
    err.downcast_ref::<Synchronization>().unwrap();

    Ok(())
}

#[tokio::test]
async fn deauthenticate_should_succeed() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server).await?;

    let client = client.deauthenticate()?;

    assert_eq!(client.host().as_str(), format!("{}/", server.base_url()));

    Ok(())
}

#[tokio::test]
async fn deauthenticate_with_multiple_strong_references_should_fail() -> anyhow::Result<()> {
    let server = MockServer::start();
    let client = create_authenticated(&server).await?;

    let _client_clone = client.clone();

    let err = client.deauthenticate().unwrap_err();
    let sync_error = err.downcast_ref::<Synchronization>().unwrap();
    assert_eq!(
        sync_error.to_string(),
        "synchronization error: the session is shared and cannot be refreshed or deauthenticated"
    );

    Ok(())
}

#[test]
fn credentials_should_keep_password_secret() {
    let credentials = credentials();

    assert_eq!(credentials.key(), API_KEY);
    assert_eq!(credentials.password().expose_secret(), PASSWORD);
    assert!(
        !format!("{credentials:?}").contains(PASSWORD),
        "password must not be printed"
    );
}
