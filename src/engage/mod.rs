//! deltaDNA Engage and Events API client and types.
//!
//! This module provides the session [`Client`], which authenticates with an API key and
//! password, caches the directory of environments visible to that key, and manages event and
//! parameter definitions.
//!
//! # Overview
//!
//! Every environment is either the Dev or the Live slice of an application. Events belong to
//! one environment; parameters belong to one application and can be linked to any event of
//! that application's environments.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Description |
//! |----------|--------|-------------|
//! | `/authentication/v1/authenticate` | POST | Exchange API key and password for a bearer token |
//! | `/engage/v1/environments/` | GET | Environments visible to the API key |
//! | `/events/v1/events` | GET | All events visible to the API key |
//! | `/events/v1/events` | POST | Create an event |
//! | `/events/v1/event-parameters` | GET | All parameters visible to the API key |
//! | `/events/v1/event-parameters` | POST | Create a parameter |
//! | `/events/v1/events/{event}/add/{parameter}` | POST | Link a parameter to an event |
//! | `/events/v1/events/{event}/remove/{parameter}` | POST | Unlink a parameter from an event |
//!
//! # Example
//!
//! ```no_run
//! use deltadna_client::auth::Credentials;
//! use deltadna_client::engage::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(deltadna_client::DEFAULT_HOST, Config::default())?
//!     .authenticate(Credentials::from_env()?)
//!     .await?;
//!
//! for environment in client.environments() {
//!     println!("{} {} ({})", environment.game_name, environment.name, environment.id);
//! }
//!
//! let details = client.event_details(101).await?;
//! std::fs::write("events.csv", details.to_csv())?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Base URL
//!
//! The default API endpoint is [`crate::DEFAULT_HOST`].

pub mod client;
pub mod types;

pub use client::{Client, Config};
