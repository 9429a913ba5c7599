use serde::{Deserialize, Serialize};

/// Names the type property that orders a stream's events.
///
/// Used for secondary indexes on a stream; the property id is not checked
/// here, see `SdsType::stream_index_for` for a checked constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StreamIndex {
    #[serde(
        rename = "SdsTypePropertyId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    sds_type_property_id: Option<String>,
}

impl StreamIndex {
    pub fn new<S: Into<String>>(type_property_id: S) -> Self {
        Self {
            sds_type_property_id: Some(type_property_id.into()),
        }
    }

    pub fn type_property_id(&self) -> Option<&str> {
        self.sds_type_property_id.as_deref()
    }

    /// Replaces the property id as given; an empty string is kept as-is.
    pub fn set_type_property_id<S: Into<String>>(&mut self, type_property_id: S) {
        self.sds_type_property_id = Some(type_property_id.into());
    }

    pub fn clear_type_property_id(&mut self) {
        self.sds_type_property_id = None;
    }
}
