//! Data contracts and request plumbing for a Sequential Data Store (SDS)
//! time-series service client.
//!
//! Nothing in this crate performs network I/O; it builds the values,
//! payloads, paths and headers an HTTP layer sends.

pub mod api;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;

pub use crate::api::dto::data_query::{
    DataRequest, IndexQuery, InterpolatedQuery, ListQuery, QueryParams, RangeQuery, RemoveWindowQuery,
    StreamTypeUpdateQuery, WindowQuery,
};
pub use crate::core::client::settings::ClientSettings;
pub use crate::core::client::token::BearerToken;
pub use crate::core::client::uri::SdsUri;
pub use crate::domain::sds::model::*;
pub use crate::errors::{SdsError, SdsResult};
