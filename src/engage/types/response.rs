use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::engage::types::request::NewParameter;
use crate::engage::types::{EnvironmentName, MetricFlags, ParameterType};
use crate::table::{Cell, Row};
use crate::types::{ApplicationId, EnvironmentId, EventId, ParameterId};

/// A Dev or Live environment visible to the API key.
///
/// `application_id` is not sent by the API. It is derived from the environment id: the Dev
/// environment id is always the application id + 1 and the Live environment id is always the
/// application id + 2. It is `None` for an environment name that is neither.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "EnvironmentEntry")]
pub struct Environment {
    pub game_name: String,
    pub id: EnvironmentId,
    pub name: EnvironmentName,
    pub application_id: Option<ApplicationId>,
}

impl Environment {
    #[must_use]
    pub fn new<S: Into<String>>(game_name: S, id: EnvironmentId, name: EnvironmentName) -> Self {
        let application_id = name.application_offset().map(|offset| id - offset);

        Self {
            game_name: game_name.into(),
            id,
            name,
            application_id,
        }
    }
}

/// Wire shape of one entry of `engage/v1/environments/`.
#[derive(Deserialize)]
struct EnvironmentEntry {
    #[serde(alias = "gameName")]
    game: String,
    #[serde(alias = "environmentId")]
    id: EnvironmentId,
    #[serde(alias = "environmentName")]
    name: EnvironmentName,
}

impl From<EnvironmentEntry> for Environment {
    fn from(entry: EnvironmentEntry) -> Self {
        Environment::new(entry.game, entry.id, entry.name)
    }
}

impl Row for Environment {
    const COLUMNS: &'static [&'static str] = &[
        "Game Name",
        "Environment ID",
        "Environment Name",
        "Application ID",
    ];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.game_name.as_str()),
            Cell::from(self.id),
            Cell::from(self.name.clone()),
            Cell::from(self.application_id),
        ]
    }
}

/// An event definition, owned by exactly one environment.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub environment: EnvironmentId,
    #[serde(default)]
    #[builder(default)]
    pub parameters: Vec<EventParameter>,
}

/// A parameter as embedded in an [`Event`]. `required` is the per-link flag.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct EventParameter {
    pub id: ParameterId,
    pub name: String,
    #[serde(default)]
    pub r#type: Option<ParameterType>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub metrics: MetricFlags,
}

/// A parameter definition, owned by exactly one application and shared by its environments.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct Parameter {
    pub id: ParameterId,
    pub name: String,
    #[serde(default)]
    pub r#type: Option<ParameterType>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub application: ApplicationId,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(flatten)]
    #[builder(default)]
    pub metrics: MetricFlags,
}

/// A pair of event name and id, in remote response order.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct EventSummary {
    pub name: String,
    pub id: EventId,
}

impl From<EventSummary> for (String, EventId) {
    fn from(summary: EventSummary) -> Self {
        (summary.name, summary.id)
    }
}

/// Outcome of [`crate::engage::Client::create_event`].
///
/// `body` is the remote body as-is, except that `parameters` is replaced by a placeholder:
/// [`EventCreation::CREATED_PLACEHOLDER`] when the event was created and
/// [`EventCreation::FAILED_PLACEHOLDER`] when it was not.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct EventCreation {
    pub is_created: bool,
    pub body: Map<String, Value>,
}

impl EventCreation {
    pub const CREATED_PLACEHOLDER: &'static str = "Not showing here.";
    pub const FAILED_PLACEHOLDER: &'static str = "None";

    pub(crate) fn new(is_created: bool, body: Value) -> Self {
        let mut body = match body {
            Value::Object(map) => map,
            other => Map::from_iter([("message".to_owned(), other)]),
        };
        let placeholder = if is_created {
            Self::CREATED_PLACEHOLDER
        } else {
            Self::FAILED_PLACEHOLDER
        };
        body.insert("parameters".to_owned(), Value::from(placeholder));

        Self { is_created, body }
    }

    /// The id of the created event, when the remote returned one.
    #[must_use]
    pub fn id(&self) -> Option<EventId> {
        self.body.get("id").and_then(Value::as_i64)
    }
}

/// Outcome of [`crate::engage::Client::create_parameter`]: the submitted body and whether the
/// remote accepted it.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterCreation {
    pub body: NewParameter,
    pub is_created: bool,
}

/// The link between a parameter and an event after
/// [`crate::engage::Client::link_parameter_to_event`].
///
/// `parameter` is the event's entry for the parameter when the remote answered with the updated
/// event. It is `None` when the body was empty or had another shape, as happens when the
/// parameter was already linked.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct LinkedParameter {
    pub event_id: EventId,
    pub event_name: String,
    pub parameter_id: ParameterId,
    pub parameter_name: String,
    pub parameter: Option<EventParameter>,
}

/// Confirmation of [`crate::engage::Client::unlink_parameter_from_event`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlinkedParameter {
    pub name: String,
    pub event_name: String,
}

/// Error body returned by the events API.
#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
}
