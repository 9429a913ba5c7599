use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::{SdsError, SdsResult};

use super::interpolation_mode::InterpolationMode;
use super::stream_index::StreamIndex;
use super::stream_type::SdsType;

/// Per-property behaviour on a single stream.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsStreamPropertyOverride {
    pub sds_type_property_id: String,
    pub uom: Option<String>,
    pub interpolation_mode: Option<InterpolationMode>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsStream {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_id: String,
    /// Secondary indexes; `None` removes them on update.
    pub indexes: Option<Vec<StreamIndex>>,
    pub property_overrides: Option<Vec<SdsStreamPropertyOverride>>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl SdsStream {
    pub fn new<I: Into<String>, T: Into<String>>(id: I, type_id: T) -> Self {
        Self {
            id: id.into(),
            name: None,
            description: None,
            type_id: type_id.into(),
            indexes: None,
            property_overrides: None,
            tags: None,
            metadata: None,
        }
    }

    pub fn add_index(&mut self, index: StreamIndex) {
        self.indexes.get_or_insert_with(Vec::new).push(index);
    }

    pub fn clear_indexes(&mut self) {
        self.indexes = None;
    }

    pub fn index_count(&self) -> usize {
        self.indexes.as_ref().map_or(0, Vec::len)
    }

    /// Inserts or replaces the interpolation override for one property.
    pub fn override_interpolation<S: Into<String>>(&mut self, property_id: S, mode: InterpolationMode) {
        let property_id = property_id.into();
        let overrides = self.property_overrides.get_or_insert_with(Vec::new);

        match overrides.iter_mut().find(|o| o.sds_type_property_id == property_id) {
            Some(existing) => existing.interpolation_mode = Some(mode),
            None => overrides.push(SdsStreamPropertyOverride {
                sds_type_property_id: property_id,
                uom: None,
                interpolation_mode: Some(mode),
            }),
        }
    }

    pub fn interpolation_for(&self, property_id: &str) -> Option<InterpolationMode> {
        self.property_overrides
            .as_ref()?
            .iter()
            .find(|o| o.sds_type_property_id == property_id)
            .and_then(|o| o.interpolation_mode)
    }

    /// Checks indexes and overrides against the stream's type.
    pub fn validate_against(&self, sds_type: &SdsType) -> SdsResult<()> {
        if self.type_id != sds_type.id {
            return Err(SdsError::InvalidValue(format!(
                "stream '{}' uses type '{}', not '{}'",
                self.id, self.type_id, sds_type.id
            )));
        }

        for index in self.indexes.iter().flatten() {
            let property_id = index.type_property_id().ok_or_else(|| {
                SdsError::InvalidValue(format!("stream '{}' has an index without a property", self.id))
            })?;

            let property = sds_type.property(property_id).ok_or_else(|| {
                SdsError::NotFound(format!("index property '{}' on type '{}'", property_id, sds_type.id))
            })?;

            if property.is_key {
                return Err(SdsError::InvalidValue(format!(
                    "property '{}' is already the primary index",
                    property_id
                )));
            }
        }

        for o in self.property_overrides.iter().flatten() {
            if sds_type.property(&o.sds_type_property_id).is_none() {
                return Err(SdsError::NotFound(format!(
                    "override property '{}' on type '{}'",
                    o.sds_type_property_id, sds_type.id
                )));
            }
        }

        Ok(())
    }
}
