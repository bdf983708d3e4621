use crate::{time_value::TimeValue, EnricherError};
use serde_json::Value;

/// The main value of a claim, as far as the enricher cares.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    /// A `wikibase-entityid` value, holding the referenced entity ID
    EntityId(String),
    Time(TimeValue),
    /// Any other datavalue type (string, quantity, coordinates...)
    Other(String),
    /// `somevalue` or `novalue` snaks carry no datavalue
    NoDataValue,
}

/// One statement under a property.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    property: String,
    value: ClaimValue,
}

impl Claim {
    pub fn new<S: Into<String>>(property: S, value: ClaimValue) -> Self {
        Self {
            property: property.into(),
            value,
        }
    }

    /// Creates a new `Claim` from one element of an action API `claims` array.
    pub fn from_json(property: &str, j: &Value) -> Result<Self, EnricherError> {
        let mainsnak = j
            .get("mainsnak")
            .filter(|v| v.is_object())
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "mainsnak".into(),
                j: j.to_owned(),
            })?;
        let value = match mainsnak.get("datavalue") {
            None | Some(Value::Null) => ClaimValue::NoDataValue,
            Some(datavalue) => Self::value_from_json(datavalue)?,
        };
        Ok(Self::new(property, value))
    }

    fn value_from_json(datavalue: &Value) -> Result<ClaimValue, EnricherError> {
        let value_type =
            datavalue["type"]
                .as_str()
                .ok_or_else(|| EnricherError::MissingOrInvalidField {
                    field: "type".into(),
                    j: datavalue.to_owned(),
                })?;
        let value = &datavalue["value"];
        match value_type {
            "wikibase-entityid" => {
                let id = value["id"]
                    .as_str()
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| EnricherError::MissingOrInvalidField {
                        field: "id".into(),
                        j: value.to_owned(),
                    })?;
                Ok(ClaimValue::EntityId(id.to_string()))
            }
            "time" => Ok(ClaimValue::Time(TimeValue::from_json(value)?)),
            other => Ok(ClaimValue::Other(other.to_string())),
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub const fn value(&self) -> &ClaimValue {
        &self.value
    }

    /// Returns the referenced entity ID, if this is an entity-valued claim.
    pub fn entity_id(&self) -> Option<&str> {
        match &self.value {
            ClaimValue::EntityId(id) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Returns the time value, if this is a date-valued claim.
    pub const fn time_value(&self) -> Option<&TimeValue> {
        match &self.value {
            ClaimValue::Time(tv) => Some(tv),
            _ => None,
        }
    }
}
