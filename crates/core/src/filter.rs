//! Query-string filter for the `/count` endpoint.
//!
//! A request selects at most one filter: a numeric `id`, an exact `name`,
//! or nothing at all (aggregate over every viewer). Anything else is
//! rejected here so the storage layer only ever sees a typed filter.

use std::collections::BTreeMap;
use std::fmt;

use crate::{FilterError, PARAM_ID, PARAM_NAME};

/// Raw query parameters grouped by name, values kept in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Group decoded `key=value` pairs, as produced by a urlencoded query string.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (key, value) in pairs {
            params.push(key, value);
        }
        params
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Which rows of `viewers` a count request aggregates over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerFilter {
    /// No filter: sum over every row.
    All,
    /// Unique-key lookup; zero matching rows means "not found".
    Id(i64),
    /// Sum over rows with this exact name; zero matching rows is a valid zero.
    Name(String),
}

impl ViewerFilter {
    /// Validate raw query parameters into a filter.
    ///
    /// Accepts no parameters, or exactly one `id` or `name` parameter carrying
    /// exactly one value. An `id` must be a non-negative base-10 integer.
    pub fn from_params(params: &QueryParams) -> Result<Self, FilterError> {
        if params.len() > 1 {
            return Err(FilterError::TooManyParameters(params.len()));
        }
        let Some((key, values)) = params.iter().next() else {
            return Ok(Self::All);
        };
        let value = match values {
            [value] => value,
            _ => {
                return Err(FilterError::InvalidValueCount {
                    key: key.to_owned(),
                    count: values.len(),
                });
            },
        };
        match key {
            PARAM_ID => parse_id(value).map(Self::Id),
            PARAM_NAME => Ok(Self::Name(value.clone())),
            other => Err(FilterError::UnknownParameter(other.to_owned())),
        }
    }
}

impl fmt::Display for ViewerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Id(id) => write!(f, "{PARAM_ID}={id}"),
            Self::Name(name) => write!(f, "{PARAM_NAME}={name}"),
        }
    }
}

fn parse_id(value: &str) -> Result<i64, FilterError> {
    let id: i64 = value.parse().map_err(|_| FilterError::NotAnInteger(value.to_owned()))?;
    if id < 0 {
        return Err(FilterError::NegativeId(value.to_owned()));
    }
    Ok(id)
}
