use bon::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::table::{Cell, Row};
use crate::types::{ApplicationId, EnvironmentId, ParameterId};

pub mod request;
pub mod response;

/// Column names of the six metric flags, in table order.
pub const METRIC_COLUMNS: [&str; 6] = [
    "calculatingMetricFirst",
    "calculatingMetricLast",
    "calculatingMetricCount",
    "calculatingMetricMin",
    "calculatingMetricMax",
    "calculatingMetricSum",
];

/// Whether the environment is the development or the production slice of an application.
#[non_exhaustive]
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvironmentName {
    Dev,
    Live,
    /// Unknown environment name from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

impl EnvironmentName {
    /// Distance between an environment id and the id of the application owning it.
    ///
    /// The Dev environment id is always the application id + 1 and the Live environment id is
    /// always the application id + 2.
    #[must_use]
    pub fn application_offset(&self) -> Option<i64> {
        match self {
            EnvironmentName::Dev => Some(1),
            EnvironmentName::Live => Some(2),
            EnvironmentName::Unknown(_) => None,
        }
    }
}

/// Data type of a parameter.
#[non_exhaustive]
#[derive(Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ParameterType {
    String,
    Integer,
    Boolean,
    Timestamp,
    Float,
    /// Unknown parameter type from the API (captures the raw value for debugging).
    #[serde(untagged)]
    Unknown(String),
}

/// Which aggregate statistics the platform computes for a parameter. `None` leaves the
/// platform default in place.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct MetricFlags {
    #[serde(default, rename = "calculatingMetricFirst")]
    pub first: Option<bool>,
    #[serde(default, rename = "calculatingMetricLast")]
    pub last: Option<bool>,
    #[serde(default, rename = "calculatingMetricCount")]
    pub count: Option<bool>,
    #[serde(default, rename = "calculatingMetricMin")]
    pub min: Option<bool>,
    #[serde(default, rename = "calculatingMetricMax")]
    pub max: Option<bool>,
    #[serde(default, rename = "calculatingMetricSum")]
    pub sum: Option<bool>,
}

impl MetricFlags {
    /// The flags in [`METRIC_COLUMNS`] order.
    #[must_use]
    pub fn to_array(&self) -> [Option<bool>; 6] {
        [
            self.first, self.last, self.count, self.min, self.max, self.sum,
        ]
    }

    fn push_cells(&self, cells: &mut Vec<Cell>) {
        cells.extend(self.to_array().map(Cell::from));
    }
}

impl From<ParameterType> for Cell {
    fn from(value: ParameterType) -> Self {
        match value {
            ParameterType::Unknown(raw) => Cell::Text(raw),
            known => Cell::Text(known.to_string()),
        }
    }
}

impl From<EnvironmentName> for Cell {
    fn from(value: EnvironmentName) -> Self {
        match value {
            EnvironmentName::Unknown(raw) => Cell::Text(raw),
            known => Cell::Text(known.to_string()),
        }
    }
}

/// One `(event, parameter)` pair of an environment, as returned by
/// [`crate::engage::Client::event_details`].
///
/// An event without parameters yields one row whose parameter columns are empty.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct EventDetail {
    pub environment_id: EnvironmentId,
    pub event_name: String,
    pub parameter_name: Option<String>,
    pub parameter_id: Option<ParameterId>,
    pub r#type: Option<ParameterType>,
    pub format: Option<String>,
    pub required: Option<bool>,
    #[builder(default)]
    pub metrics: MetricFlags,
}

impl Row for EventDetail {
    const COLUMNS: &'static [&'static str] = &[
        "Environment ID",
        "eventName",
        "parameterName",
        "parameterID",
        "type",
        "format",
        "required",
        METRIC_COLUMNS[0],
        METRIC_COLUMNS[1],
        METRIC_COLUMNS[2],
        METRIC_COLUMNS[3],
        METRIC_COLUMNS[4],
        METRIC_COLUMNS[5],
    ];

    fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::from(self.environment_id),
            Cell::from(self.event_name.as_str()),
            Cell::from(self.parameter_name.clone()),
            Cell::from(self.parameter_id),
            Cell::from(self.r#type.clone()),
            Cell::from(self.format.clone()),
            Cell::from(self.required),
        ];
        self.metrics.push_cells(&mut cells);
        cells
    }
}

/// A parameter of an application, as returned by [`crate::engage::Client::list_parameters`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct ParameterSummary {
    pub application_id: ApplicationId,
    pub parameter_id: ParameterId,
    pub name: String,
    pub r#type: Option<ParameterType>,
    pub description: Option<String>,
    #[builder(default)]
    pub metrics: MetricFlags,
}

impl Row for ParameterSummary {
    const COLUMNS: &'static [&'static str] = &[
        "ApplicationID",
        "ParameterID",
        "name",
        "type",
        "description",
        METRIC_COLUMNS[0],
        METRIC_COLUMNS[1],
        METRIC_COLUMNS[2],
        METRIC_COLUMNS[3],
        METRIC_COLUMNS[4],
        METRIC_COLUMNS[5],
    ];

    fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::from(self.application_id),
            Cell::from(self.parameter_id),
            Cell::from(self.name.as_str()),
            Cell::from(self.r#type.clone()),
            Cell::from(self.description.clone()),
        ];
        self.metrics.push_cells(&mut cells);
        cells
    }
}

/// A parameter found by name, as returned by [`crate::engage::Client::search_parameter`].
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct ParameterMatch {
    pub environment_id: EnvironmentId,
    /// The application owning the parameter, labelled `Game ID` in the table
    pub game_id: ApplicationId,
    pub parameter_id: ParameterId,
    pub parameter_name: String,
    pub description: Option<String>,
    pub r#type: Option<ParameterType>,
    #[builder(default)]
    pub metrics: MetricFlags,
}

impl Row for ParameterMatch {
    const COLUMNS: &'static [&'static str] = &[
        "Environment ID",
        "Game ID",
        "Parameter ID",
        "Parameter Name",
        "Description",
        "Type",
        METRIC_COLUMNS[0],
        METRIC_COLUMNS[1],
        METRIC_COLUMNS[2],
        METRIC_COLUMNS[3],
        METRIC_COLUMNS[4],
        METRIC_COLUMNS[5],
    ];

    fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            Cell::from(self.environment_id),
            Cell::from(self.game_id),
            Cell::from(self.parameter_id),
            Cell::from(self.parameter_name.as_str()),
            Cell::from(self.description.clone()),
            Cell::from(self.r#type.clone()),
        ];
        self.metrics.push_cells(&mut cells);
        cells
    }
}
