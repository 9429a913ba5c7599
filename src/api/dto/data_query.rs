//! Data and listing query DTOs

use http::Method;
use serde::Serialize;
use validator::Validate;

use crate::domain::sds::model::BoundaryType;
use crate::errors::{invalid_value, SdsResult};

/// Method, path and rendered query string of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
}

impl DataRequest {
    pub fn new<P: Into<String>>(method: Method, path: P, query: String) -> Self {
        Self {
            method,
            path: path.into(),
            query,
        }
    }

    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }
}

/// Renders validated query parameters, camelCase keys, encoded values.
pub trait QueryParams: Validate {
    fn pairs(&self) -> Vec<(&'static str, String)>;

    fn to_query_string(&self) -> SdsResult<String> {
        self.validate().map_err(invalid_value)?;

        Ok(self
            .pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(&v)))
            .collect::<Vec<_>>()
            .join("&"))
    }
}

/// `count` events starting at `start_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct RangeQuery {
    #[validate(length(min = 1))]
    pub start_index: String,
    #[validate(range(min = 1))]
    pub count: u32,
    pub skip: Option<u32>,
    pub reversed: Option<bool>,
    pub boundary_type: Option<BoundaryType>,
    #[validate(length(min = 1))]
    pub stream_view_id: Option<String>,
}

impl RangeQuery {
    pub fn new<S: Into<String>>(start_index: S, count: u32) -> Self {
        Self {
            start_index: start_index.into(),
            count,
            skip: None,
            reversed: None,
            boundary_type: None,
            stream_view_id: None,
        }
    }

    pub fn boundary(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = Some(boundary_type);
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = Some(reversed);
        self
    }

    pub fn through_view<S: Into<String>>(mut self, stream_view_id: S) -> Self {
        self.stream_view_id = Some(stream_view_id.into());
        self
    }
}

impl QueryParams for RangeQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startIndex", self.start_index.clone()),
            ("count", self.count.to_string()),
        ];
        if let Some(v) = self.skip {
            pairs.push(("skip", v.to_string()));
        }
        if let Some(v) = self.reversed {
            pairs.push(("reversed", v.to_string()));
        }
        if let Some(v) = self.boundary_type {
            pairs.push(("boundaryType", v.as_code().to_string()));
        }
        if let Some(v) = &self.stream_view_id {
            pairs.push(("streamViewId", v.clone()));
        }
        pairs
    }
}

/// Stored events between two indexes, optionally filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct WindowQuery {
    #[validate(length(min = 1))]
    pub start_index: String,
    #[validate(length(min = 1))]
    pub end_index: String,
    pub boundary_type: Option<BoundaryType>,
    /// Filter expression, e.g. `Radians lt 50`.
    #[validate(length(min = 1))]
    pub filter: Option<String>,
}

impl WindowQuery {
    pub fn new<S: Into<String>, E: Into<String>>(start_index: S, end_index: E) -> Self {
        Self {
            start_index: start_index.into(),
            end_index: end_index.into(),
            boundary_type: None,
            filter: None,
        }
    }

    pub fn boundary(mut self, boundary_type: BoundaryType) -> Self {
        self.boundary_type = Some(boundary_type);
        self
    }

    pub fn filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl QueryParams for WindowQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("startIndex", self.start_index.clone()),
            ("endIndex", self.end_index.clone()),
        ];
        if let Some(v) = self.boundary_type {
            pairs.push(("boundaryType", v.as_code().to_string()));
        }
        if let Some(v) = &self.filter {
            pairs.push(("filter", v.clone()));
        }
        pairs
    }
}

/// `count` evenly spaced calculated events between two indexes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct InterpolatedQuery {
    #[validate(length(min = 1))]
    pub start_index: String,
    #[validate(length(min = 1))]
    pub end_index: String,
    #[validate(range(min = 1))]
    pub count: u32,
}

impl InterpolatedQuery {
    pub fn new<S: Into<String>, E: Into<String>>(start_index: S, end_index: E, count: u32) -> Self {
        Self {
            start_index: start_index.into(),
            end_index: end_index.into(),
            count,
        }
    }
}

impl QueryParams for InterpolatedQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startIndex", self.start_index.clone()),
            ("endIndex", self.end_index.clone()),
            ("count", self.count.to_string()),
        ]
    }
}

/// Paged, optionally searched or filtered listing of types or streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct ListQuery {
    /// Free-text search; an empty string lists everything.
    pub query: Option<String>,
    /// Filter expression, e.g. `contains(Id, 'Target')`.
    #[validate(length(min = 1))]
    pub filter: Option<String>,
    pub skip: Option<u32>,
    #[validate(range(min = 1))]
    pub count: Option<u32>,
}

impl ListQuery {
    pub fn filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn search<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn page(mut self, skip: u32, count: u32) -> Self {
        self.skip = Some(skip);
        self.count = Some(count);
        self
    }
}

impl QueryParams for ListQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.query {
            pairs.push(("query", v.clone()));
        }
        if let Some(v) = &self.filter {
            pairs.push(("filter", v.clone()));
        }
        if let Some(v) = self.skip {
            pairs.push(("skip", v.to_string()));
        }
        if let Some(v) = self.count {
            pairs.push(("count", v.to_string()));
        }
        pairs
    }
}

/// Stored events to delete between two indexes, inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct RemoveWindowQuery {
    #[validate(length(min = 1))]
    pub start_index: String,
    #[validate(length(min = 1))]
    pub end_index: String,
}

impl RemoveWindowQuery {
    pub fn new<S: ToString, E: ToString>(start_index: S, end_index: E) -> Self {
        Self {
            start_index: start_index.to_string(),
            end_index: end_index.to_string(),
        }
    }
}

impl QueryParams for RemoveWindowQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startIndex", self.start_index.clone()),
            ("endIndex", self.end_index.clone()),
        ]
    }
}

/// A single event addressed by its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct IndexQuery {
    #[validate(length(min = 1))]
    pub index: String,
}

impl IndexQuery {
    pub fn new<S: ToString>(index: S) -> Self {
        Self {
            index: index.to_string(),
        }
    }
}

impl QueryParams for IndexQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("index", self.index.clone())]
    }
}

/// Stream view to convert a stream's type through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct StreamTypeUpdateQuery {
    #[validate(length(min = 1))]
    pub stream_view_id: String,
}

impl QueryParams for StreamTypeUpdateQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![("streamViewId", self.stream_view_id.clone())]
    }
}
