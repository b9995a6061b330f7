//! Walks through the environment directory and the event and parameter definitions visible to
//! an API key.
//!
//! Run with tracing enabled:
//! ```sh
//! DELTADNA_API_KEY=... DELTADNA_PASSWORD=... RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example engage --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=engage.log RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example engage --features tracing
//! ```
//!
//! Pass an environment id as the first argument to pick one, otherwise the first environment of
//! the directory is used. The event details are written to `event_details.csv`.

use std::fs::File;

use deltadna_client::auth::Credentials;
use deltadna_client::engage::Client;
use deltadna_client::engage::types::request::ParametersRequest;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default()
        .authenticate(Credentials::from_env()?)
        .await?;

    for environment in client.environments() {
        info!(
            endpoint = "environments",
            game = %environment.game_name,
            environment_id = environment.id,
            application_id = ?environment.application_id
        );
    }

    let environment_id = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => match client.environments().first() {
            Some(environment) => environment.id,
            None => {
                warn!("no environment is visible to this API key");
                return Ok(());
            }
        },
    };

    match client.list_events(environment_id).await {
        Ok(events) => {
            info!(endpoint = "list_events", count = events.len());
            for event in &events {
                info!(endpoint = "list_events", name = %event.name, id = event.id);
            }
        }
        Err(e) => debug!(endpoint = "list_events", error = %e),
    }

    match client.event_details(environment_id).await {
        Ok(details) => {
            details.write_csv(File::create("event_details.csv")?)?;
            info!(endpoint = "event_details", rows = details.len(), file = "event_details.csv");
        }
        Err(e) => debug!(endpoint = "event_details", error = %e),
    }

    match client
        .list_parameters(environment_id, &ParametersRequest::default())
        .await
    {
        Ok(parameters) => {
            info!(endpoint = "list_parameters", count = parameters.len());
            for parameter in &parameters {
                info!(
                    endpoint = "list_parameters",
                    id = parameter.parameter_id,
                    name = %parameter.name,
                    parameter_type = ?parameter.r#type
                );
            }
        }
        Err(e) => debug!(endpoint = "list_parameters", error = %e),
    }

    Ok(())
}
