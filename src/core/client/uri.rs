use http::Method;
use urlencoding::encode;

use crate::api::dto::data_query::{
    DataRequest, IndexQuery, InterpolatedQuery, ListQuery, QueryParams, RangeQuery, RemoveWindowQuery,
    StreamTypeUpdateQuery, WindowQuery,
};
use crate::errors::SdsResult;

/// Resource paths under one tenant namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdsUri {
    resource: String,
    api_version: String,
    tenant: String,
    namespace: String,
}

impl SdsUri {
    pub fn new<R, V, T, N>(resource: R, api_version: V, tenant: T, namespace: N) -> Self
    where
        R: Into<String>,
        V: Into<String>,
        T: Into<String>,
        N: Into<String>,
    {
        Self {
            resource: resource.into().trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            tenant: tenant.into(),
            namespace: namespace.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// OpenID discovery document of the identity server.
    pub fn discovery(&self) -> String {
        format!("{}/identity/.well-known/openid-configuration", self.resource)
    }

    pub fn api_base(&self) -> String {
        format!("{}/api/{}", self.resource, self.api_version)
    }

    pub fn namespace_base(&self) -> String {
        format!(
            "{}/Tenants/{}/Namespaces/{}",
            self.api_base(),
            encode(&self.tenant),
            encode(&self.namespace)
        )
    }

    pub fn types(&self) -> String {
        format!("{}/Types", self.namespace_base())
    }

    pub fn type_(&self, type_id: &str) -> String {
        format!("{}/{}", self.types(), encode(type_id))
    }

    pub fn streams(&self) -> String {
        format!("{}/Streams", self.namespace_base())
    }

    pub fn stream(&self, stream_id: &str) -> String {
        format!("{}/{}", self.streams(), encode(stream_id))
    }

    pub fn stream_data(&self, stream_id: &str) -> String {
        format!("{}/Data", self.stream(stream_id))
    }

    pub fn stream_views(&self) -> String {
        format!("{}/StreamViews", self.namespace_base())
    }

    pub fn stream_view(&self, stream_view_id: &str) -> String {
        format!("{}/{}", self.stream_views(), encode(stream_view_id))
    }

    pub fn stream_view_map(&self, stream_view_id: &str) -> String {
        format!("{}/Map", self.stream_view(stream_view_id))
    }

    /// Tags endpoint; the body is a JSON array of strings.
    pub fn stream_tags(&self, stream_id: &str) -> String {
        format!("{}/Tags", self.stream(stream_id))
    }

    /// Metadata endpoint; the body is a JSON object of string pairs.
    pub fn stream_metadata(&self, stream_id: &str) -> String {
        format!("{}/Metadata", self.stream(stream_id))
    }

    pub fn stream_metadata_value(&self, stream_id: &str, key: &str) -> String {
        format!("{}/{}", self.stream_metadata(stream_id), encode(key))
    }

    pub fn list_types(&self, query: &ListQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::GET, self.types(), query.to_query_string()?))
    }

    pub fn list_streams(&self, query: &ListQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::GET, self.streams(), query.to_query_string()?))
    }

    /// Converts the stored events of a stream to the target type of a view.
    pub fn update_stream_type(&self, stream_id: &str, query: &StreamTypeUpdateQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(
            Method::PUT,
            format!("{}/Type", self.stream(stream_id)),
            query.to_query_string()?,
        ))
    }

    pub fn first_value(&self, stream_id: &str) -> DataRequest {
        DataRequest::new(Method::GET, format!("{}/First", self.stream_data(stream_id)), String::new())
    }

    pub fn last_value(&self, stream_id: &str) -> DataRequest {
        DataRequest::new(Method::GET, format!("{}/Last", self.stream_data(stream_id)), String::new())
    }

    pub fn range_values(&self, stream_id: &str, query: &RangeQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::GET, self.stream_data(stream_id), query.to_query_string()?))
    }

    pub fn window_values(&self, stream_id: &str, query: &WindowQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::GET, self.stream_data(stream_id), query.to_query_string()?))
    }

    pub fn interpolated_values(&self, stream_id: &str, query: &InterpolatedQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(
            Method::GET,
            format!("{}/Interpolated", self.stream_data(stream_id)),
            query.to_query_string()?,
        ))
    }

    pub fn remove_value(&self, stream_id: &str, query: &IndexQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::DELETE, self.stream_data(stream_id), query.to_query_string()?))
    }

    pub fn remove_window_values(&self, stream_id: &str, query: &RemoveWindowQuery) -> SdsResult<DataRequest> {
        Ok(DataRequest::new(Method::DELETE, self.stream_data(stream_id), query.to_query_string()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sds::model::BoundaryType;

    fn uri() -> SdsUri {
        SdsUri::new("https://dat-b.osisoft.com/", "v1", "tenant-1", "ns one")
    }

    #[test]
    fn test_bases() {
        let uri = uri();
        assert_eq!(uri.api_base(), "https://dat-b.osisoft.com/api/v1");
        assert_eq!(
            uri.namespace_base(),
            "https://dat-b.osisoft.com/api/v1/Tenants/tenant-1/Namespaces/ns%20one"
        );
        assert_eq!(
            uri.discovery(),
            "https://dat-b.osisoft.com/identity/.well-known/openid-configuration"
        );
    }

    #[test]
    fn test_resource_paths_encode_ids() {
        let uri = uri();
        let ns = uri.namespace_base();
        assert_eq!(uri.type_("SampleType"), format!("{}/Types/SampleType", ns));
        assert_eq!(uri.stream("a/b"), format!("{}/Streams/a%2Fb", ns));
        assert_eq!(uri.stream_view_map("View"), format!("{}/StreamViews/View/Map", ns));
    }

    #[test]
    fn test_range_values_request() {
        let request = uri()
            .range_values(
                "SampleStream",
                &RangeQuery::new("1", 3).boundary(BoundaryType::ExactOrCalculated),
            )
            .unwrap();
        assert!(request.path.ends_with("/Streams/SampleStream/Data"));
        assert!(request.to_url().ends_with("/Data?startIndex=1&count=3&boundaryType=3"));
    }

    #[test]
    fn test_interpolated_and_invalid_queries() {
        let uri = uri();
        let request = uri
            .interpolated_values("SampleStream", &InterpolatedQuery::new("5", "32", 4))
            .unwrap();
        assert!(request.path.ends_with("/Data/Interpolated"));

        assert!(uri
            .window_values("SampleStream", &WindowQuery::new("", "180"))
            .is_err());
    }

    #[test]
    fn test_first_and_last_value() {
        let uri = uri();
        let first = uri.first_value("SampleStream");
        assert_eq!(first.method, Method::GET);
        assert!(first.to_url().ends_with("/Streams/SampleStream/Data/First"));
        assert!(uri.last_value("SampleStream").to_url().ends_with("/Data/Last"));
    }

    #[test]
    fn test_update_stream_type_request() {
        let query = StreamTypeUpdateQuery { stream_view_id: "SampleAutoStreamView".into() };
        let request = uri().update_stream_type("SampleStream", &query).unwrap();
        assert_eq!(request.method, Method::PUT);
        assert!(request
            .to_url()
            .ends_with("/Streams/SampleStream/Type?streamViewId=SampleAutoStreamView"));

        let empty = StreamTypeUpdateQuery { stream_view_id: String::new() };
        assert!(uri().update_stream_type("SampleStream", &empty).is_err());
    }

    #[test]
    fn test_filtered_type_listing() {
        let uri = uri();
        let request = uri
            .list_types(&ListQuery::default().search("").filter("contains(Id, 'Target')"))
            .unwrap();
        assert_eq!(request.path, uri.types());
        assert_eq!(request.query, "query=&filter=contains%28Id%2C%20%27Target%27%29");
        assert_eq!(uri.list_streams(&ListQuery::default()).unwrap().to_url(), uri.streams());
    }

    #[test]
    fn test_tags_and_metadata_paths() {
        let uri = uri();
        let stream = uri.stream("SampleStream");
        assert_eq!(uri.stream_tags("SampleStream"), format!("{}/Tags", stream));
        assert_eq!(uri.stream_metadata("SampleStream"), format!("{}/Metadata", stream));
        assert_eq!(
            uri.stream_metadata_value("SampleStream", "Region Name"),
            format!("{}/Metadata/Region%20Name", stream)
        );
    }

    #[test]
    fn test_delete_requests() {
        let uri = uri();
        let window = uri
            .remove_window_values("SampleStream", &RemoveWindowQuery::new(1, 200))
            .unwrap();
        assert_eq!(window.method, Method::DELETE);
        assert!(window.to_url().ends_with("/Data?startIndex=1&endIndex=200"));

        let single = uri.remove_value("SampleStream", &IndexQuery::new(0)).unwrap();
        assert_eq!(single.method, Method::DELETE);
        assert!(single.to_url().ends_with("/Data?index=0"));
    }
}
