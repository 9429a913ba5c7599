use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::debug;

use crate::errors::{SdsError, SdsResult};

use super::stream_index::StreamIndex;
use super::type_code::SdsTypeCode;

/// Reference to the type carried by a property; only its code is needed
/// for primitive properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsTypeReference {
    pub sds_type_code: SdsTypeCode,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsTypeProperty {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Part of the primary index.
    #[serde(default)]
    pub is_key: bool,
    /// Position within a compound index.
    pub order: Option<i32>,
    pub sds_type: SdsTypeReference,
}

impl SdsTypeProperty {
    pub fn new<S: Into<String>>(id: S, code: SdsTypeCode) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            is_key: false,
            order: None,
            sds_type: SdsTypeReference { sds_type_code: code },
        }
    }

    pub fn key<S: Into<String>>(id: S, code: SdsTypeCode) -> Self {
        Self {
            is_key: true,
            ..Self::new(id, code)
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn type_code(&self) -> SdsTypeCode {
        self.sds_type.sds_type_code
    }
}

/// Stream type definition: the shape of every event in a stream.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsType {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sds_type_code: SdsTypeCode,
    #[serde(default)]
    pub properties: Vec<SdsTypeProperty>,
}

impl SdsType {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            sds_type_code: SdsTypeCode::Object,
            properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: SdsTypeProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property(&self, id: &str) -> Option<&SdsTypeProperty> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Key properties in compound-index order; declaration order breaks ties.
    /// Keys without an `Order` sort after every ordered key.
    pub fn key_properties(&self) -> Vec<&SdsTypeProperty> {
        let mut keys: Vec<&SdsTypeProperty> = self.properties.iter().filter(|p| p.is_key).collect();
        keys.sort_by_key(|p| (p.order.is_none(), p.order));
        keys
    }

    /// Secondary index over an existing property of this type.
    pub fn stream_index_for(&self, property_id: &str) -> SdsResult<StreamIndex> {
        match self.property(property_id) {
            Some(p) => Ok(StreamIndex::new(p.id.clone())),
            None => {
                debug!(type_id = %self.id, property_id, "no such property for stream index");
                Err(SdsError::NotFound(format!(
                    "property '{}' on type '{}'",
                    property_id, self.id
                )))
            }
        }
    }

    /// The primary index must exist and use indexable codes.
    pub fn validate_keys(&self) -> SdsResult<()> {
        let keys = self.key_properties();
        if keys.is_empty() {
            return Err(SdsError::InvalidValue(format!(
                "type '{}' has no key property",
                self.id
            )));
        }

        if let Some(bad) = keys.iter().find(|p| !p.type_code().is_indexable()) {
            return Err(SdsError::InvalidValue(format!(
                "key property '{}' has non-indexable type {}",
                bad.id,
                bad.type_code()
            )));
        }

        Ok(())
    }
}
