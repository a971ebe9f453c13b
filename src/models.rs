//! # Genderize API Data Models
//!
//! Queries sent to the service and the per-name records it returns.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Gender inferred for a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Male,
    Female,
    /// The service could not determine a gender for the name.
    #[default]
    Unknown,
}

impl Gender {
    /// Wire representation; `Unknown` maps to the empty string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Gender::Unknown)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Gender::Unknown => serializer.serialize_none(),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    /// `null`, `""` and any other value, string or not, decode to [`Gender::Unknown`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let gender = match Value::deserialize(deserializer)? {
            Value::String(text) if text == "male" => Gender::Male,
            Value::String(text) if text == "female" => Gender::Female,
            _ => Gender::Unknown,
        };
        Ok(gender)
    }
}

/// Gender information for a single name
///
/// When [`gender`](Self::gender) is [`Gender::Unknown`], `probability` and
/// `count` carry no meaning and should be ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// The name as echoed back by the service
    pub name: String,
    #[serde(default)]
    pub gender: Gender,
    /// Confidence in the inferred gender, between 0.0 and 1.0
    #[serde(default, deserialize_with = "crate::common::serde::lenient_f64")]
    pub probability: f64,
    /// Number of samples backing the estimate
    #[serde(default, deserialize_with = "crate::common::serde::lenient_u64")]
    pub count: u64,
}

impl Response {
    pub fn is_known(&self) -> bool {
        self.gender.is_known()
    }
}

/// Reply body of a batch request.
///
/// The service answers with a list, but a bare object is accepted as the reply
/// for exactly one name. The list shape is tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Records {
    Many(Vec<Response>),
    One(Response),
}

impl From<Records> for Vec<Response> {
    fn from(records: Records) -> Self {
        match records {
            Records::Many(responses) => responses,
            Records::One(response) => vec![response],
        }
    }
}

/// A list of names with optional country and language hints
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub names: Vec<String>,
    /// ISO 3166-1 alpha-2 country code, e.g. `dk`
    pub country_id: Option<String>,
    /// ISO 639-1 language code, e.g. `da`
    pub language_id: Option<String>,
}

impl Query {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            country_id: None,
            language_id: None,
        }
    }

    /// Restricts the estimate to a country.
    pub fn with_country_id(mut self, country_id: impl Into<String>) -> Self {
        self.country_id = Some(country_id.into());
        self
    }

    /// Restricts the estimate to a language.
    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    /// Country hint, treating an empty string as absent.
    pub fn country_id(&self) -> Option<&str> {
        self.country_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Language hint, treating an empty string as absent.
    pub fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref().filter(|id| !id.is_empty())
    }
}

impl From<Vec<String>> for Query {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<&[&str]> for Query {
    fn from(names: &[&str]) -> Self {
        Self::new(names.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(names: [&str; N]) -> Self {
        Self::new(names)
    }
}
