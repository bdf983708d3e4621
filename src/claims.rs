use crate::{claim::Claim, time_value::TimeValue, EnricherError};
use serde_json::Value;
use std::collections::HashMap;

/// All claims of an entity, grouped by property ID in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    claims: HashMap<String, Vec<Claim>>, // property => Claims
}

impl Claims {
    /// Creates a new `Claims` object from the `claims` object of an entity.
    /// Claims that cannot be parsed are dropped; Wikidata data is frequently partial.
    /// The API sends an entity without claims as `[]` instead of `{}`.
    pub fn from_json(j: &Value) -> Result<Self, EnricherError> {
        let mut ret = Self::default();
        if j.is_null() || j.as_array().is_some_and(Vec::is_empty) {
            return Ok(ret);
        }
        let claims_j = j
            .as_object()
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "claims".into(),
                j: j.to_owned(),
            })?;
        for (property, claims) in claims_j {
            let Some(claims) = claims.as_array() else {
                tracing::debug!("Skipping non-array claims for {property}");
                continue;
            };
            let claims = claims
                .iter()
                .filter_map(|c| match Claim::from_json(property, c) {
                    Ok(claim) => Some(claim),
                    Err(e) => {
                        tracing::debug!("Skipping malformed {property} claim: {e}");
                        None
                    }
                })
                .collect();
            ret.claims.insert(property.to_owned(), claims);
        }
        Ok(ret)
    }

    /// Returns the number of claims
    pub fn len(&self) -> usize {
        self.claims.values().map(Vec::len).sum()
    }

    /// Returns true if there are no claims
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the claims for a specific property
    pub fn property<S: Into<String>>(&self, property: S) -> &[Claim] {
        self.claims
            .get(&property.into())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the IDs of all entities referenced by a property, in source order.
    /// Claims with other value types are skipped.
    pub fn entity_refs<S: Into<String>>(&self, property: S) -> Vec<String> {
        self.property(property)
            .iter()
            .filter_map(Claim::entity_id)
            .map(|id| id.to_string())
            .collect()
    }

    /// Returns all time values of a property, in source order.
    pub fn time_values<S: Into<String>>(&self, property: S) -> Vec<&TimeValue> {
        self.property(property)
            .iter()
            .filter_map(Claim::time_value)
            .collect()
    }
}

/// Returns the IDs of all entities referenced by `property_id` in `claims`.
pub fn extract_entity_refs(claims: &Claims, property_id: &str) -> Vec<String> {
    claims.entity_refs(property_id)
}
