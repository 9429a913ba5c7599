use serde::{Deserialize, Deserializer, Serialize};
use serde_with::skip_serializing_none;

use crate::errors::SdsResult;

/// One source → target property mapping of a stream view.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsStreamViewProperty {
    pub source_id: String,
    /// `None` when the source property has no counterpart in the target type.
    pub target_id: Option<String>,
    /// View applied to a nested (non-primitive) property.
    pub sds_stream_view: Option<Box<SdsStreamView>>,
}

impl SdsStreamViewProperty {
    pub fn new<S: Into<String>, T: Into<String>>(source_id: S, target_id: T) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: Some(target_id.into()),
            sds_stream_view: None,
        }
    }
}

/// Reads a stream as if it had a different type.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsStreamView {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub source_type_id: String,
    pub target_type_id: String,
    pub properties: Option<Vec<SdsStreamViewProperty>>,
}

impl SdsStreamView {
    /// View relying on automatic mapping between same-shaped types.
    pub fn automatic<I, S, T>(id: I, source_type_id: S, target_type_id: T) -> Self
    where
        I: Into<String>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            name: None,
            description: None,
            source_type_id: source_type_id.into(),
            target_type_id: target_type_id.into(),
            properties: None,
        }
    }

    pub fn with_mapping(mut self, property: SdsStreamViewProperty) -> Self {
        self.properties.get_or_insert_with(Vec::new).push(property);
        self
    }
}

/// Resolved mapping the service reports for a stream view; lists every
/// source property, mapped or not.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SdsStreamViewMap {
    #[serde(default)]
    pub source_type_id: String,
    #[serde(default)]
    pub target_type_id: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub properties: Option<Vec<SdsStreamViewProperty>>,
}

impl SdsStreamViewMap {
    pub fn to_json(&self) -> SdsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> SdsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn entries(&self) -> impl Iterator<Item = &SdsStreamViewProperty> {
        self.properties.iter().flatten()
    }

    pub fn mapped(&self) -> impl Iterator<Item = &SdsStreamViewProperty> {
        self.entries().filter(|p| p.target_id.is_some())
    }

    pub fn unmapped(&self) -> impl Iterator<Item = &SdsStreamViewProperty> {
        self.entries().filter(|p| p.target_id.is_none())
    }

    /// One `source => target` line per property.
    pub fn describe(&self) -> Vec<String> {
        self.entries()
            .map(|p| match &p.target_id {
                Some(target) => format!("{} => {}", p.source_id, target),
                None => format!("{} => Not Mapped", p.source_id),
            })
            .collect()
    }
}

fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANUAL_MAP: &str = r#"{
        "SourceTypeId": "SampleType",
        "TargetTypeId": "SampleType_TargetInt",
        "Properties": [
            { "SourceId": "Order", "TargetId": "OrderTarget" },
            { "SourceId": "Sin", "TargetId": "SinInt" },
            { "SourceId": "Radians" }
        ]
    }"#;

    #[test]
    fn test_from_json_and_describe() {
        let map = SdsStreamViewMap::from_json(MANUAL_MAP).unwrap();
        assert_eq!(map.source_type_id, "SampleType");
        assert_eq!(map.mapped().count(), 2);
        assert_eq!(map.unmapped().count(), 1);
        assert_eq!(
            map.describe(),
            vec!["Order => OrderTarget", "Sin => SinInt", "Radians => Not Mapped"]
        );
    }

    #[test]
    fn test_empty_object_and_empty_properties() {
        let empty = SdsStreamViewMap::from_json("{}").unwrap();
        assert_eq!(empty, SdsStreamViewMap::default());

        let no_props = SdsStreamViewMap::from_json(
            r#"{ "SourceTypeId": "a", "TargetTypeId": "b", "Properties": [] }"#,
        )
        .unwrap();
        assert!(no_props.properties.is_none());
        assert!(no_props.describe().is_empty());
    }

    #[test]
    fn test_to_json_keeps_type_ids() {
        let map = SdsStreamViewMap {
            source_type_id: "SampleType".into(),
            target_type_id: "SampleType_Target".into(),
            properties: None,
        };
        let json: serde_json::Value = serde_json::from_str(&map.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "SourceTypeId": "SampleType", "TargetTypeId": "SampleType_Target" })
        );
    }

    #[test]
    fn test_manual_view_json() {
        let view = SdsStreamView::automatic("SampleManualStreamView", "SampleType", "SampleType_TargetInt")
            .with_mapping(SdsStreamViewProperty::new("Order", "OrderTarget"))
            .with_mapping(SdsStreamViewProperty::new("Sin", "SinInt"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["Properties"][1]["TargetId"], "SinInt");
        assert!(json["Properties"][0].get("SdsStreamView").is_none());
    }
}
