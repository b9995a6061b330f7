use std::sync::Arc;

use bon::Builder;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use url::Url;

use crate::auth::state::{Authenticated, State, Unauthenticated};
use crate::auth::{AuthenticationResponse, Credentials, bearer_headers};
use crate::engage::types::request::{
    CreateParameterRequest, LinkParameter, NewEvent, NewParameter, ParametersRequest,
    UnlinkParameter,
};
use crate::engage::types::response::{
    Environment, Event, EventCreation, EventParameter, EventSummary, LinkedParameter, Parameter,
    ParameterCreation, UnlinkedParameter,
};
#[cfg(feature = "tracing")]
use crate::engage::types::response::Problem;
use crate::engage::types::{EventDetail, MetricFlags, ParameterMatch, ParameterSummary};
use crate::error::{Error, Synchronization};
use crate::table::{Cell, Table};
use crate::types::{ApplicationId, EnvironmentId, EventId, ParameterId, SecretString};
use crate::{DEFAULT_HOST, Result, ToQueryParams as _};

const DEFAULT_USER_AGENT: &str = "rs_deltadna_client";

/// Configuration for [`Client`]
#[non_exhaustive]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Override for the `User-Agent` header. Defaults to `rs_deltadna_client`.
    #[builder(into)]
    user_agent: Option<String>,
}

/// The main way for API users to interact with deltaDNA.
///
/// A [`Client`] is either [`Unauthenticated`] or [`Authenticated`]. Only an authenticated client
/// holds a bearer token and the environment directory, so only it exposes the event and
/// parameter operations.
///
/// Calls are issued one at a time: every operation awaits its remote calls in sequence.
///
/// ```rust,no_run
/// use deltadna_client::Result;
/// use deltadna_client::auth::Credentials;
/// use deltadna_client::engage::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let credentials = Credentials::new("api-key", "password".to_owned());
///     let client = Client::default().authenticate(credentials).await?;
///
///     for (name, id) in client.list_events(101).await?.into_iter().map(<(String, i64)>::from) {
///         println!("{name}: {id}");
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S: State = Unauthenticated> {
    inner: Arc<ClientInner<S>>,
}

impl Default for Client<Unauthenticated> {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

#[derive(Debug)]
struct ClientInner<S: State> {
    config: Config,
    /// The current [`State`] of this client
    state: S,
    /// The [`Url`] against which `client` is making requests.
    host: Url,
    /// The inner [`ReqwestClient`] used to make requests to `host`.
    client: ReqwestClient,
}

impl<S: State> ClientInner<S> {
    async fn token(&self, credentials: &Credentials) -> Result<SecretString> {
        let request = self
            .client
            .request(
                Method::POST,
                format!("{}authentication/v1/authenticate", self.host),
            )
            .json(&credentials.body())
            .build()?;

        let response: AuthenticationResponse = crate::request(&self.client, request, None)
            .await
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, "connection to deltaDNA failed");
                #[cfg(not(feature = "tracing"))]
                let _: &Error = e;
            })?;

        #[cfg(feature = "tracing")]
        tracing::info!("successfully connected to deltaDNA");

        Ok(response.id_token)
    }

    async fn environments(&self, token: &SecretString) -> Result<Vec<Environment>> {
        let request = self
            .client
            .request(Method::GET, format!("{}engage/v1/environments/", self.host))
            .build()?;

        crate::request(&self.client, request, Some(bearer_headers(token)?)).await
    }
}

impl<S: State> Client<S> {
    /// Returns the API host URL.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.inner.host
    }

    fn client(&self) -> &ReqwestClient {
        &self.inner.client
    }
}

impl Client<Unauthenticated> {
    /// Creates a new unauthenticated client.
    ///
    /// # Arguments
    ///
    /// * `host` - The API URL, e.g. [`DEFAULT_HOST`]
    /// * `config` - Client configuration options
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid or the HTTP client cannot be initialized.
    pub fn new(host: &str, config: Config) -> Result<Client<Unauthenticated>> {
        let mut headers = HeaderMap::new();

        let user_agent = match &config.user_agent {
            Some(agent) => HeaderValue::from_str(agent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        headers.insert(USER_AGENT, user_agent);
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                config,
                state: Unauthenticated,
                host: Url::parse(host)?,
                client,
            }),
        })
    }

    /// Exchanges `credentials` for a bearer token and fetches the environment directory,
    /// elevating this client to [`Client<Authenticated>`].
    ///
    /// The token and the directory are kept for the lifetime of the returned client. Neither
    /// is renewed automatically; see [`Client::refresh`].
    ///
    /// # Errors
    ///
    /// A non-successful response from the authentication or environments endpoint is an error
    /// of kind [`crate::error::Kind::Status`]. No client exists without a token.
    pub async fn authenticate(self, credentials: Credentials) -> Result<Client<Authenticated>> {
        let inner = Arc::into_inner(self.inner).ok_or(Synchronization)?;

        let token = inner.token(&credentials).await?;
        let environments = inner.environments(&token).await?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                config: inner.config,
                state: Authenticated {
                    credentials,
                    token,
                    environments,
                },
                host: inner.host,
                client: inner.client,
            }),
        })
    }
}

impl Client<Authenticated> {
    /// Demotes this client, dropping the token and the environment directory.
    pub fn deauthenticate(self) -> Result<Client<Unauthenticated>> {
        let inner = Arc::into_inner(self.inner).ok_or(Synchronization)?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                config: inner.config,
                state: Unauthenticated,
                host: inner.host,
                client: inner.client,
            }),
        })
    }

    /// Re-acquires the bearer token and re-fetches the environment directory.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::Synchronization`] error if a clone of this client is
    /// alive. The current token and directory are kept if either remote call fails.
    pub async fn refresh(&mut self) -> Result<()> {
        let inner = Arc::get_mut(&mut self.inner).ok_or(Synchronization)?;

        let token = inner.token(&inner.state.credentials).await?;
        let environments = inner.environments(&token).await?;

        inner.state.token = token;
        inner.state.environments = environments;

        Ok(())
    }

    /// Returns the cached environment directory, in remote response order.
    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.inner.state.environments
    }

    /// Returns the cached environment directory as a table with the columns
    /// `Game Name, Environment ID, Environment Name, Application ID`.
    #[must_use]
    pub fn list_environments(&self) -> Table<Environment> {
        self.environments().iter().cloned().collect()
    }

    /// Looks up `environment_id` in the cached directory.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::NotFound`] error if the environment is not visible to
    /// the API key.
    pub fn environment(&self, environment_id: EnvironmentId) -> Result<&Environment> {
        self.environments()
            .iter()
            .find(|environment| environment.id == environment_id)
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    environment_id,
                    "environment id not found in current API key"
                );
                Error::unknown_environment(environment_id)
            })
    }

    /// Returns the application owning `environment_id`.
    pub fn application_id(&self, environment_id: EnvironmentId) -> Result<ApplicationId> {
        let environment = self.environment(environment_id)?;

        environment.application_id.ok_or_else(|| {
            Error::validation(format!(
                "environment {environment_id} is neither Dev nor Live ({}), it has no application",
                Cell::from(environment.name.clone())
            ))
        })
    }

    fn headers(&self) -> Result<HeaderMap> {
        bearer_headers(&self.inner.state.token)
    }

    /// Fetches every event visible to the API key, across all environments.
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        let request = self
            .client()
            .request(Method::GET, format!("{}events/v1/events", self.host()))
            .build()?;

        crate::request(self.client(), request, Some(self.headers()?)).await
    }

    /// Events of `environment_id`, in remote response order. The environment is checked
    /// against the directory before any remote call is made.
    async fn environment_events(&self, environment_id: EnvironmentId) -> Result<Vec<Event>> {
        let environment = self.environment(environment_id)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            game = %environment.game_name,
            environment = %Cell::from(environment.name.clone()),
            "game connected"
        );
        #[cfg(not(feature = "tracing"))]
        let _: &Environment = environment;

        let events = self.fetch_events().await?;

        Ok(events
            .into_iter()
            .filter(|event| event.environment == environment_id)
            .collect())
    }

    /// Returns the name and id of every event of `environment_id`, in remote response order.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::NotFound`] error, without calling the remote, if the
    /// environment is not in the directory, and a [`crate::error::Kind::Status`] error if the
    /// remote call fails.
    pub async fn list_events(&self, environment_id: EnvironmentId) -> Result<Vec<EventSummary>> {
        let events = self.environment_events(environment_id).await?;

        Ok(events
            .into_iter()
            .map(|event| EventSummary {
                name: event.name,
                id: event.id,
            })
            .collect())
    }

    /// Returns one row per `(event, parameter)` pair of `environment_id`.
    ///
    /// An event without parameters yields a single row with empty parameter columns.
    pub async fn event_details(&self, environment_id: EnvironmentId) -> Result<Table<EventDetail>> {
        let events = self.environment_events(environment_id).await?;

        Ok(event_detail_rows(environment_id, events))
    }

    /// Creates an event in `environment_id`.
    ///
    /// A non-successful response is not an error: the returned [`EventCreation`] carries the
    /// remote error body and `is_created == false`.
    pub async fn create_event(
        &self,
        environment_id: EnvironmentId,
        name: &str,
        description: &str,
    ) -> Result<EventCreation> {
        self.environment(environment_id)?;

        let request = self
            .client()
            .request(Method::POST, format!("{}events/v1/events", self.host()))
            .json(&NewEvent {
                name,
                description,
                environment: environment_id,
            })
            .build()?;

        let submission = crate::submit(self.client(), request, Some(self.headers()?)).await?;

        #[cfg(feature = "tracing")]
        log_event_creation(name, environment_id, &submission);

        Ok(EventCreation::new(submission.is_success(), submission.body))
    }

    /// Fetches every parameter visible to the API key, across all applications.
    ///
    /// This is the first stage of [`Self::list_parameters`] and [`Self::search_parameter`]. The
    /// remote does not reliably filter by application, see [`filter_by_application`].
    pub async fn fetch_parameters(&self, request: &ParametersRequest) -> Result<Vec<Parameter>> {
        let params = request.query_params();
        let request = self
            .client()
            .request(
                Method::GET,
                format!("{}events/v1/event-parameters{params}", self.host()),
            )
            .build()?;

        crate::request(self.client(), request, Some(self.headers()?)).await
    }

    /// Parameters of the application owning `environment_id`, in remote response order.
    async fn application_parameters(
        &self,
        environment_id: EnvironmentId,
        request: &ParametersRequest,
    ) -> Result<(ApplicationId, Vec<Parameter>)> {
        let application_id = self.application_id(environment_id)?;
        let parameters = self.fetch_parameters(request).await?;

        Ok((
            application_id,
            filter_by_application(parameters, application_id),
        ))
    }

    /// Returns the parameters of the application owning `environment_id`.
    ///
    /// All parameters visible to the API key are fetched, then filtered to the application on
    /// the client side.
    pub async fn list_parameters(
        &self,
        environment_id: EnvironmentId,
        request: &ParametersRequest,
    ) -> Result<Table<ParameterSummary>> {
        let (application_id, parameters) = self
            .application_parameters(environment_id, request)
            .await?;

        Ok(parameters
            .into_iter()
            .map(|parameter| ParameterSummary {
                application_id,
                parameter_id: parameter.id,
                name: parameter.name,
                r#type: parameter.r#type,
                description: parameter.description,
                metrics: parameter.metrics,
            })
            .collect())
    }

    /// Returns the parameters named `name` in the application owning `environment_id`. The
    /// table has zero rows when there is no such parameter.
    pub async fn search_parameter(
        &self,
        environment_id: EnvironmentId,
        name: &str,
        request: &ParametersRequest,
    ) -> Result<Table<ParameterMatch>> {
        let (application_id, parameters) = self
            .application_parameters(environment_id, request)
            .await?;

        Ok(parameters
            .into_iter()
            .filter(|parameter| parameter.name == name)
            .map(|parameter| ParameterMatch {
                environment_id,
                game_id: application_id,
                parameter_id: parameter.id,
                parameter_name: parameter.name,
                description: parameter.description,
                r#type: parameter.r#type,
                metrics: parameter.metrics,
            })
            .collect())
    }

    /// Creates a parameter in the application owning `environment_id`.
    ///
    /// Without an explicit `request.id`, the submitted id is one more than the largest
    /// parameter id linked to an event of the environment (see [`next_parameter_id`]).
    ///
    /// A non-successful response is not an error: the returned [`ParameterCreation`] carries
    /// the submitted body and `is_created == false`.
    pub async fn create_parameter(
        &self,
        environment_id: EnvironmentId,
        request: &CreateParameterRequest,
    ) -> Result<ParameterCreation> {
        let application_id = self.application_id(environment_id)?;

        let id = match request.id {
            Some(id) => id,
            None => next_parameter_id(&self.event_details(environment_id).await?),
        };

        let body = NewParameter {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            application: application_id,
            r#type: request.r#type.clone(),
            format: request.format.clone(),
            metrics: request.metrics,
        };

        let http_request = self
            .client()
            .request(
                Method::POST,
                format!("{}events/v1/event-parameters", self.host()),
            )
            .json(&body)
            .build()?;

        let submission = crate::submit(self.client(), http_request, Some(self.headers()?)).await?;

        #[cfg(feature = "tracing")]
        self.log_parameter_creation(environment_id, &submission);

        Ok(ParameterCreation {
            body,
            is_created: submission.is_success(),
        })
    }

    #[cfg(feature = "tracing")]
    fn log_parameter_creation(&self, environment_id: EnvironmentId, submission: &crate::Submission) {
        if !submission.is_success() {
            let problem: Problem = serde_json::from_value(submission.body.clone()).unwrap_or_default();
            tracing::warn!(
                status = %submission.status_code,
                title = problem.title.as_deref().unwrap_or_default(),
                "failed to create the parameter"
            );
            return;
        }

        let game = self
            .environment(environment_id)
            .map(|environment| environment.game_name.as_str())
            .unwrap_or_default();
        match serde_json::from_value::<Parameter>(submission.body.clone()) {
            Ok(created) => {
                let [first, last, count, min, max, sum] = created.metrics.to_array();
                tracing::info!(
                    name = %created.name,
                    application = created.application,
                    game,
                    parameter_type = ?created.r#type,
                    format = ?created.format,
                    calculating_metric_first = ?first,
                    calculating_metric_last = ?last,
                    calculating_metric_count = ?count,
                    calculating_metric_min = ?min,
                    calculating_metric_max = ?max,
                    calculating_metric_sum = ?sum,
                    "successfully created the parameter"
                );
            }
            Err(e) => {
                tracing::info!(game, error = %e, "successfully created the parameter");
            }
        }
    }

    /// Resolves `event_name` and `parameter_name` each to exactly one id.
    async fn resolve_link(
        &self,
        environment_id: EnvironmentId,
        parameter_name: &str,
        event_name: &str,
    ) -> Result<(EventId, ParameterId)> {
        let events: Vec<EventSummary> = self
            .list_events(environment_id)
            .await?
            .into_iter()
            .filter(|event| event.name == event_name)
            .collect();
        let event_id = match events.as_slice() {
            [event] => event.id,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(event_name, matches = events.len(), "event is not found");
                return Err(Error::event_not_found(event_name, events.len()));
            }
        };

        let parameters = self
            .search_parameter(environment_id, parameter_name, &ParametersRequest::default())
            .await?;
        let parameter_id = match parameters.rows() {
            [parameter] => parameter.parameter_id,
            _ => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    parameter_name,
                    matches = parameters.len(),
                    "parameter is not found"
                );
                return Err(Error::parameter_not_found(parameter_name, parameters.len()));
            }
        };

        Ok((event_id, parameter_id))
    }

    /// Links the parameter `parameter_name` to the event `event_name`, with the per-link
    /// `required` flag.
    ///
    /// Any successful response counts as linked, whatever its body. Linking a parameter that is
    /// already linked is therefore not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::Kind::NotFound`] error if either name does not resolve to
    /// exactly one id, and a [`crate::error::Kind::Status`] error if the remote call fails.
    pub async fn link_parameter_to_event(
        &self,
        environment_id: EnvironmentId,
        parameter_name: &str,
        event_name: &str,
        required: bool,
    ) -> Result<LinkedParameter> {
        let (event_id, parameter_id) = self
            .resolve_link(environment_id, parameter_name, event_name)
            .await?;

        let request = self
            .client()
            .request(
                Method::POST,
                format!(
                    "{}events/v1/events/{event_id}/add/{parameter_id}",
                    self.host()
                ),
            )
            .json(&LinkParameter { required })
            .build()?;
        let path = request.url().path().to_owned();

        let body = crate::submit(self.client(), request, Some(self.headers()?))
            .await?
            .error_for_status(Method::POST, path)?;
        let parameter = linked_entry(body, parameter_id);

        #[cfg(feature = "tracing")]
        tracing::info!(
            parameter_name,
            event_name,
            echoed = parameter.is_some(),
            "parameter added to event"
        );

        Ok(LinkedParameter {
            event_id,
            event_name: event_name.to_owned(),
            parameter_id,
            parameter_name: parameter_name.to_owned(),
            parameter,
        })
    }

    /// Unlinks the parameter `parameter_name` from the event `event_name`.
    ///
    /// # Errors
    ///
    /// See [`Self::link_parameter_to_event`].
    pub async fn unlink_parameter_from_event(
        &self,
        environment_id: EnvironmentId,
        parameter_name: &str,
        event_name: &str,
    ) -> Result<UnlinkedParameter> {
        let (event_id, parameter_id) = self
            .resolve_link(environment_id, parameter_name, event_name)
            .await?;

        let request = self
            .client()
            .request(
                Method::POST,
                format!(
                    "{}events/v1/events/{event_id}/remove/{parameter_id}",
                    self.host()
                ),
            )
            .json(&UnlinkParameter {})
            .build()?;
        let path = request.url().path().to_owned();

        crate::submit(self.client(), request, Some(self.headers()?))
            .await?
            .error_for_status(Method::POST, path)?;

        #[cfg(feature = "tracing")]
        tracing::info!(parameter_name, event_name, "parameter removed from event");

        Ok(UnlinkedParameter {
            name: parameter_name.to_owned(),
            event_name: event_name.to_owned(),
        })
    }
}

/// Keeps the parameters owned by `application_id`, in their original order.
///
/// The parameter listing endpoint returns parameters of every application visible to the API
/// key, whatever application filter is passed to it.
#[must_use]
pub fn filter_by_application(
    parameters: Vec<Parameter>,
    application_id: ApplicationId,
) -> Vec<Parameter> {
    parameters
        .into_iter()
        .filter(|parameter| parameter.application == application_id)
        .collect()
}

/// Candidate id for a new parameter: the largest `parameterID` in `details` plus one, or `1`
/// when no event has parameters.
///
/// The ids come from parameters linked to events, which are not guaranteed to cover every
/// parameter of the application. Pass an explicit id in [`CreateParameterRequest`] when an
/// authoritative one is known.
#[must_use]
pub fn next_parameter_id(details: &Table<EventDetail>) -> ParameterId {
    details
        .iter()
        .filter_map(|row| row.parameter_id)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(feature = "tracing")]
fn log_event_creation(name: &str, environment_id: EnvironmentId, submission: &crate::Submission) {
    if submission.is_success() {
        tracing::info!(name, environment_id, "successfully created the event");
    } else {
        tracing::warn!(
            name,
            environment_id,
            status = %submission.status_code,
            body = %submission.body,
            "failed creating the event"
        );
    }
}

/// The entry for `parameter_id` in an add response, when the body is the updated event.
fn linked_entry(body: Value, parameter_id: ParameterId) -> Option<EventParameter> {
    serde_json::from_value::<Event>(body)
        .ok()?
        .parameters
        .into_iter()
        .find(|parameter| parameter.id == parameter_id)
}

fn event_detail_rows(environment_id: EnvironmentId, events: Vec<Event>) -> Table<EventDetail> {
    let mut rows = Vec::new();

    for event in events {
        if event.parameters.is_empty() {
            rows.push(EventDetail {
                environment_id,
                event_name: event.name,
                parameter_name: None,
                parameter_id: None,
                r#type: None,
                format: None,
                required: None,
                metrics: MetricFlags::default(),
            });
            continue;
        }

        for parameter in event.parameters {
            rows.push(EventDetail {
                environment_id,
                event_name: event.name.clone(),
                parameter_name: Some(parameter.name),
                parameter_id: Some(parameter.id),
                r#type: parameter.r#type,
                format: parameter.format,
                required: parameter.required,
                metrics: parameter.metrics,
            });
        }
    }

    Table::new(rows)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn client_default_should_succeed() {
        let client = Client::default();
        assert_eq!(client.host().as_str(), DEFAULT_HOST);
    }

    #[test]
    fn invalid_user_agent_should_fail() {
        let config = Config::builder().user_agent("bad\nagent").build();

        Client::new(DEFAULT_HOST, config).unwrap_err();
    }

    #[test]
    fn filter_by_application_should_keep_order() {
        let parameters = vec![
            Parameter::builder().id(1).name("a").application(100).build(),
            Parameter::builder().id(2).name("b").application(200).build(),
            Parameter::builder().id(3).name("c").application(100).build(),
        ];

        let kept: Vec<ParameterId> = filter_by_application(parameters, 100)
            .into_iter()
            .map(|parameter| parameter.id)
            .collect();

        assert_eq!(kept, vec![1, 3]);
    }

    #[test]
    fn event_detail_rows_should_keep_events_without_parameters() {
        let events = vec![
            Event::builder()
                .id(1)
                .name("gameStarted")
                .environment(101)
                .parameters(vec![
                    EventParameter::builder().id(10).name("platform").build(),
                    EventParameter::builder().id(12).name("userLevel").build(),
                ])
                .build(),
            Event::builder().id(2).name("emptyEvent").environment(101).build(),
        ];

        let table = event_detail_rows(101, events);

        assert_eq!(table.len(), 3);
        assert_eq!(table[0].parameter_name.as_deref(), Some("platform"));
        assert_eq!(table[1].parameter_id, Some(12));
        assert_eq!(table[2].event_name, "emptyEvent");
        assert_eq!(table[2].parameter_id, None);
        assert_eq!(next_parameter_id(&table), 13);
    }

    #[test]
    fn linked_entry_should_find_parameter_by_id() {
        let body = json!({
            "id": 2,
            "name": "levelUp",
            "environment": 101,
            "parameters": [
                { "id": 10, "name": "platform" },
                { "id": 13, "name": "coinsSpent", "required": true }
            ]
        });

        let entry = linked_entry(body, 13).unwrap();

        assert_eq!(entry.name, "coinsSpent");
        assert_eq!(entry.required, Some(true));
    }

    #[test]
    fn linked_entry_should_tolerate_other_bodies() {
        assert_eq!(linked_entry(Value::Null, 13), None);
        assert_eq!(linked_entry(json!({ "message": "already linked" }), 13), None);
        assert_eq!(
            linked_entry(
                json!({ "id": 2, "name": "levelUp", "environment": 101, "parameters": [] }),
                13
            ),
            None
        );
    }

    #[test]
    fn next_parameter_id_should_start_at_one() {
        let table = event_detail_rows(101, Vec::new());

        assert_eq!(next_parameter_id(&table), 1);
    }
}
