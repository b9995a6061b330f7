#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::engage::types::{MetricFlags, ParameterType};
use crate::types::{ApplicationId, EnvironmentId, ParameterId};

/// Optional query of the `events/v1/event-parameters` listing.
///
/// The remote does not reliably honour `application_id`, so
/// [`crate::engage::Client::list_parameters`] always filters by application on the client side as
/// well.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct ParametersRequest {
    pub limit: Option<u32>,
    pub page: Option<u32>,
    #[serde(rename = "applicationID")]
    pub application_id: Option<ApplicationId>,
    pub required: Option<bool>,
    pub r#type: Option<ParameterType>,
}

/// Body of `POST events/v1/events`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewEvent<'req> {
    pub(crate) name: &'req str,
    pub(crate) description: &'req str,
    pub(crate) environment: EnvironmentId,
}

/// A parameter to create with [`crate::engage::Client::create_parameter`].
///
/// # Example
///
/// ```
/// use deltadna_client::engage::types::request::CreateParameterRequest;
/// use deltadna_client::engage::types::{MetricFlags, ParameterType};
///
/// let request = CreateParameterRequest::builder()
///     .name("coinsSpent")
///     .description("Coins spent in the transaction")
///     .r#type(ParameterType::Integer)
///     .format("")
///     .metrics(MetricFlags::builder().sum(true).build())
///     .build();
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct CreateParameterRequest {
    pub name: String,
    pub description: String,
    pub r#type: ParameterType,
    pub format: String,
    #[builder(default)]
    pub metrics: MetricFlags,
    /// Id to submit. When absent, the client derives a candidate from the parameter ids already
    /// linked to events of the environment.
    pub id: Option<ParameterId>,
}

/// Body of `POST events/v1/event-parameters`, as submitted. Unset metric flags are sent as
/// `null`.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
pub struct NewParameter {
    pub id: ParameterId,
    pub name: String,
    pub description: String,
    pub application: ApplicationId,
    pub r#type: ParameterType,
    pub format: String,
    #[serde(flatten)]
    #[builder(default)]
    pub metrics: MetricFlags,
}

/// Body of `POST events/v1/events/{event}/add/{parameter}`.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct LinkParameter {
    pub(crate) required: bool,
}

/// Body of `POST events/v1/events/{event}/remove/{parameter}`.
#[expect(
    clippy::empty_structs_with_brackets,
    reason = "A unit struct serializes as null, the remote expects {}"
)]
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct UnlinkParameter {}
