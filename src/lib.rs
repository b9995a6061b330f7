#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod auth;
pub mod engage;
pub mod error;
pub(crate) mod serde_helpers;
pub mod table;
pub mod types;

use reqwest::header::HeaderMap;
use reqwest::{Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Base URL of the deltaDNA REST API.
pub const DEFAULT_HOST: &str = "https://api.deltadna.net/api/";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        if params.is_empty() {
            String::new()
        } else {
            format!("?{params}")
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Status and JSON body of a call whose non-successful outcome is part of the operation's
/// result rather than an error.
#[derive(Debug)]
pub(crate) struct Submission {
    pub(crate) status_code: StatusCode,
    pub(crate) body: Value,
}

impl Submission {
    pub(crate) fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Turns a non-successful submission into a [`error::Kind::Status`] error.
    pub(crate) fn error_for_status(self, method: Method, path: String) -> Result<Value> {
        if self.is_success() {
            return Ok(self.body);
        }

        let message = match self.body {
            Value::String(text) => text,
            body => body.to_string(),
        };
        Err(Error::status(self.status_code, method, path, message))
    }
}

#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn request<Response: DeserializeOwned>(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if !status_code.is_success() {
        let message = response.text().await.unwrap_or_default();

        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %status_code,
            method = %method,
            path = %path,
            message = %message,
            "API request failed"
        );

        return Err(Error::status(status_code, method, path, message));
    }

    let json_value = response.json::<Value>().await?;
    serde_helpers::deserialize_with_warnings(json_value)
}

/// Like [`request`], but a non-successful status is returned to the caller together with the
/// body instead of becoming an error.
///
/// An empty body becomes [`Value::Null`]. Any other successful body must be JSON, while a
/// failure body that is not JSON is kept as a string.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request, headers),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn submit(
    client: &reqwest::Client,
    mut request: Request,
    headers: Option<HeaderMap>,
) -> Result<Submission> {
    if let Some(h) = headers {
        request.headers_mut().extend(h);
    }

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    let text = response.text().await?;
    let body: Value = if text.trim().is_empty() {
        Value::Null
    } else if status_code.is_success() {
        serde_json::from_str(&text)?
    } else {
        serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text))
    };

    Ok(Submission { status_code, body })
}
