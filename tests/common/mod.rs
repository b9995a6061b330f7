#![allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    reason = "Do not need additional syntax for setting up tests, and https://github.com/rust-lang/rust-clippy/issues/13981"
)]
#![allow(
    unused,
    reason = "Deeply nested uses in sub-modules are falsely flagged as being unused"
)]

use deltadna_client::auth::Credentials;
use deltadna_client::auth::state::Authenticated;
use deltadna_client::engage::{Client, Config};
use httpmock::MockServer;
use reqwest::StatusCode;
use serde_json::{Value, json};

pub const API_KEY: &str = "api-key";
pub const PASSWORD: &str = "password";
pub const TOKEN: &str = "id-token";
pub const BEARER: &str = "Bearer id-token";

/// Dev and Live environments of application 100 ("Foo") and the Dev environment of
/// application 200 ("Bar").
pub const FOO_DEV: i64 = 101;
pub const FOO_LIVE: i64 = 102;
pub const BAR_DEV: i64 = 201;

pub type TestClient = Client<Authenticated>;

#[must_use]
pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, PASSWORD.to_owned())
}

#[must_use]
pub fn environments() -> Value {
    json!([
        { "game": "Foo", "id": FOO_DEV, "name": "Dev" },
        { "game": "Foo", "id": FOO_LIVE, "name": "Live" },
        { "game": "Bar", "id": BAR_DEV, "name": "Dev" }
    ])
}

pub async fn create_authenticated(server: &MockServer) -> anyhow::Result<TestClient> {
    let auth = server.mock(|when, then| {
        when.method(httpmock::Method::POST)
            .path("/authentication/v1/authenticate")
            .json_body(json!({ "key": API_KEY, "password": PASSWORD }));
        then.status(StatusCode::OK)
            .json_body(json!({ "idToken": TOKEN }));
    });
    let directory = server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/engage/v1/environments/")
            .header("authorization", BEARER);
        then.status(StatusCode::OK).json_body(environments());
    });

    let client = Client::new(&server.base_url(), Config::default())?
        .authenticate(credentials())
        .await?;

    auth.assert();
    directory.assert();

    Ok(client)
}

/// Two events of [`FOO_DEV`], one of them without parameters, and one event of [`BAR_DEV`].
#[must_use]
pub fn events() -> Value {
    json!([
        {
            "id": 1,
            "name": "gameStarted",
            "description": "Session start",
            "environment": FOO_DEV,
            "parameters": [
                {
                    "id": 10,
                    "name": "platform",
                    "type": "STRING",
                    "format": "",
                    "required": true,
                    "calculatingMetricFirst": true
                },
                {
                    "id": 12,
                    "name": "userLevel",
                    "type": "INTEGER",
                    "format": "",
                    "required": false,
                    "calculatingMetricMax": true
                }
            ]
        },
        {
            "id": 2,
            "name": "levelUp",
            "environment": FOO_DEV,
            "parameters": []
        },
        {
            "id": 3,
            "name": "gameEnded",
            "environment": BAR_DEV,
            "parameters": [
                { "id": 40, "name": "platform", "type": "STRING", "required": true }
            ]
        }
    ])
}

/// Parameters of applications 100 and 200, interleaved.
#[must_use]
pub fn parameters() -> Value {
    json!([
        {
            "id": 10,
            "name": "platform",
            "type": "STRING",
            "format": "",
            "description": "Device platform",
            "application": 100,
            "calculatingMetricFirst": true
        },
        {
            "id": 40,
            "name": "platform",
            "type": "STRING",
            "description": "Device platform",
            "application": 200
        },
        {
            "id": 12,
            "name": "userLevel",
            "type": "INTEGER",
            "description": "Level of the user",
            "application": 100,
            "calculatingMetricMax": true
        },
        {
            "id": 13,
            "name": "coinsSpent",
            "type": "INTEGER",
            "description": "Coins spent",
            "application": 100
        }
    ])
}

pub fn mock_events(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/events/v1/events")
            .header("authorization", BEARER);
        then.status(StatusCode::OK).json_body(events());
    })
}

pub fn mock_parameters(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(httpmock::Method::GET)
            .path("/events/v1/event-parameters")
            .header("authorization", BEARER);
        then.status(StatusCode::OK).json_body(parameters());
    })
}
