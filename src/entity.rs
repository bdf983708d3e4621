use crate::{claims::Claims, language_strings::LanguageStrings, EnricherError};
use serde_json::Value;

/// A Wikidata entity as returned by `wbgetentities`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    id: String,
    labels: LanguageStrings,
    descriptions: LanguageStrings,
    claims: Claims,
}

impl Entity {
    /// Creates a new `Entity` from one value of the `entities` object.
    pub fn from_json(j: &Value) -> Result<Self, EnricherError> {
        let id = j["id"]
            .as_str()
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "id".into(),
                j: j.to_owned(),
            })?
            .to_string();
        Ok(Self {
            id,
            labels: LanguageStrings::from_json(&j["labels"])?,
            descriptions: LanguageStrings::from_json(&j["descriptions"])?,
            claims: Claims::from_json(&j["claims"])?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn labels(&self) -> &LanguageStrings {
        &self.labels
    }

    pub const fn descriptions(&self) -> &LanguageStrings {
        &self.descriptions
    }

    pub const fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Returns the label in `language`, if any
    pub fn label(&self, language: &str) -> Option<&str> {
        self.labels.get_lang(language)
    }

    /// Returns the description in `language`, if any
    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions.get_lang(language)
    }
}
