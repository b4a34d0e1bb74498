//! Request DTOs for the gateway API
//!
//! Defines the arguments accepted by each lookup tool.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::pagination::PageRequest;

/// Language sent upstream when a request does not set one
pub const DEFAULT_LANGUAGE: &str = "en";

// == Store ==
/// App store platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Store {
    Apple,
    Google,
}

impl Store {
    pub fn as_str(&self) -> &'static str {
        match self {
            Store::Apple => "apple",
            Store::Google => "google",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Store {
    type Err = AppError;

    /// Case sensitive: only `apple` and `google` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apple" => Ok(Store::Apple),
            "google" => Ok(Store::Google),
            other => Err(AppError::InvalidInput(format!(
                "Invalid store: {}. Must be \"apple\" or \"google\"",
                other
            ))),
        }
    }
}

// == Term Params ==
/// Arguments for `autocomplete` and `search`.
///
/// `store` stays a raw string here so that an unknown platform surfaces as
/// the store validation message rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermParams {
    pub store: String,
    pub term: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

// == App Params ==
/// Arguments for `details` and `reviews`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppParams {
    pub store: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

// == Validated Query ==
/// Arguments after validation, ready for key derivation and the upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub store: Store,
    /// Name of the subject parameter, `term` or `id`
    pub subject_name: &'static str,
    pub subject: String,
    pub language: Option<String>,
    pub page: PageRequest,
}

impl Query {
    fn build(
        store: &str,
        subject_name: &'static str,
        subject: &str,
        language: Option<&String>,
        page: PageRequest,
    ) -> Result<Self, AppError> {
        let store: Store = store.parse()?;
        if subject.trim().is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Missing required argument: {}",
                subject_name
            )));
        }

        Ok(Self {
            store,
            subject_name,
            subject: subject.to_string(),
            language: language.filter(|l| !l.is_empty()).cloned(),
            page,
        })
    }

    /// Parameters that identify the lookup in the cache.
    ///
    /// Uses the requested language, so an omitted language is left out of
    /// the key even though the upstream call defaults it.
    pub fn key_params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        params.insert("store".to_string(), Value::from(self.store.as_str()));
        params.insert(self.subject_name.to_string(), Value::from(self.subject.clone()));
        if let Some(language) = &self.language {
            params.insert("language".to_string(), Value::from(language.clone()));
        }
        params
    }

    /// Query string for the upstream call.
    pub fn upstream_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("store", self.store.as_str().to_string()),
            (self.subject_name, self.subject.clone()),
            (
                "language",
                self.language
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            ),
        ]
    }
}

impl TryFrom<&TermParams> for Query {
    type Error = AppError;

    fn try_from(params: &TermParams) -> Result<Self, Self::Error> {
        Query::build(
            &params.store,
            "term",
            &params.term,
            params.language.as_ref(),
            PageRequest::new(params.page, params.page_size),
        )
    }
}

impl TryFrom<&AppParams> for Query {
    type Error = AppError;

    fn try_from(params: &AppParams) -> Result<Self, Self::Error> {
        Query::build(
            &params.store,
            "id",
            &params.id,
            params.language.as_ref(),
            PageRequest::new(params.page, params.page_size),
        )
    }
}

// == Tool Call ==
/// Body of `POST /tools/call`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}
