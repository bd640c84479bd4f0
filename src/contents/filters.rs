//! Query filters: search value, ordering and display type.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort key for path contents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderingParameter {
    #[default]
    #[serde(alias = "name")]
    Name,
    #[serde(alias = "hits")]
    Hits,
    #[serde(alias = "misses")]
    Misses,
    #[serde(alias = "partials")]
    Partials,
    #[serde(alias = "lines")]
    Lines,
    #[serde(alias = "coverage")]
    Coverage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderingDirection {
    #[default]
    #[serde(alias = "asc")]
    Asc,
    #[serde(alias = "desc")]
    Desc,
}

/// Grouped-by-immediate-child or fully flattened presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayType {
    #[default]
    #[serde(alias = "tree")]
    Tree,
    #[serde(alias = "list")]
    List,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ordering {
    #[serde(default)]
    pub parameter: OrderingParameter,
    #[serde(default)]
    pub direction: OrderingDirection,
}

impl Ordering {
    pub fn new(parameter: OrderingParameter, direction: OrderingDirection) -> Self {
        Self {
            parameter,
            direction,
        }
    }
}

/// Filters for one path contents query. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<Ordering>,
    #[serde(default)]
    pub display_type: DisplayType,
}

impl Filters {
    pub fn with_search(mut self, value: impl Into<String>) -> Self {
        self.search_value = Some(value.into());
        self
    }

    pub fn with_ordering(mut self, parameter: OrderingParameter, direction: OrderingDirection) -> Self {
        self.ordering = Some(Ordering::new(parameter, direction));
        self
    }

    pub fn with_display_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = display_type;
        self
    }

    /// The search term when one applies; empty strings do not count.
    pub fn active_search(&self) -> Option<&str> {
        self.search_value.as_deref().filter(|s| !s.is_empty())
    }

    pub fn ordering_or_default(&self) -> Ordering {
        self.ordering.unwrap_or_default()
    }
}

impl FromStr for OrderingParameter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NAME" => Ok(OrderingParameter::Name),
            "HITS" => Ok(OrderingParameter::Hits),
            "MISSES" => Ok(OrderingParameter::Misses),
            "PARTIALS" => Ok(OrderingParameter::Partials),
            "LINES" => Ok(OrderingParameter::Lines),
            "COVERAGE" => Ok(OrderingParameter::Coverage),
            _ => Err(ApiError::InvalidArgument(format!(
                "unknown ordering parameter: {} (expected NAME, HITS, MISSES, PARTIALS, LINES or COVERAGE)",
                s
            ))),
        }
    }
}

impl FromStr for OrderingDirection {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(OrderingDirection::Asc),
            "DESC" => Ok(OrderingDirection::Desc),
            _ => Err(ApiError::InvalidArgument(format!(
                "unknown ordering direction: {} (expected ASC or DESC)",
                s
            ))),
        }
    }
}

impl FromStr for DisplayType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TREE" => Ok(DisplayType::Tree),
            "LIST" => Ok(DisplayType::List),
            _ => Err(ApiError::InvalidArgument(format!(
                "unknown display type: {} (expected TREE or LIST)",
                s
            ))),
        }
    }
}

impl fmt::Display for OrderingParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderingParameter::Name => "NAME",
            OrderingParameter::Hits => "HITS",
            OrderingParameter::Misses => "MISSES",
            OrderingParameter::Partials => "PARTIALS",
            OrderingParameter::Lines => "LINES",
            OrderingParameter::Coverage => "COVERAGE",
        };
        f.write_str(s)
    }
}

impl fmt::Display for OrderingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderingDirection::Asc => "ASC",
            OrderingDirection::Desc => "DESC",
        })
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayType::Tree => "TREE",
            DisplayType::List => "LIST",
        })
    }
}
