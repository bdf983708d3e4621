use crate::EnricherError;
use serde_json::Value;
use std::collections::HashMap;

/// Labels or descriptions of an entity, keyed by language code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageStrings {
    ls: HashMap<String, String>,
}

impl LanguageStrings {
    /// Parses the `labels` or `descriptions` object of an entity, eg
    /// `{"en": {"language": "en", "value": "Half-Life"}}`.
    /// A missing (`null`) object, or the `[]` the API sends when there are none,
    /// yields an empty set.
    pub fn from_json(j: &Value) -> Result<Self, EnricherError> {
        if j.is_null() || j.as_array().is_some_and(Vec::is_empty) {
            return Ok(Self::default());
        }
        let map = j
            .as_object()
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "LanguageStrings".into(),
                j: j.to_owned(),
            })?;
        let mut ret = Self::default();
        for (language, v) in map {
            let value = v["value"]
                .as_str()
                .ok_or_else(|| EnricherError::MissingOrInvalidField {
                    field: "value".into(),
                    j: v.to_owned(),
                })?;
            ret.ls.insert(language.to_owned(), value.to_owned());
        }
        Ok(ret)
    }

    /// Returns the value for a language
    pub fn get_lang<S: Into<String>>(&self, language: S) -> Option<&str> {
        self.ls.get(&language.into()).map(|s| s.as_str())
    }

    /// Returns the number of languages
    pub fn len(&self) -> usize {
        self.ls.len()
    }

    /// Returns true if there are no languages
    pub fn is_empty(&self) -> bool {
        self.ls.is_empty()
    }
}
