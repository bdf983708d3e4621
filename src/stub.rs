use crate::EnricherError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

pub const WIKIDATA_KEY: &str = "WikidataKey";
pub const TITLE: &str = "Title";
pub const DESCRIPTION: &str = "Description";
pub const RELEASE_DATE: &str = "ReleaseDate";
pub const LANGUAGES: &str = "Languages";
pub const EXTERNAL_URLS: &str = "ExternalUrls";
/// Key of the Wikidata link inside `ExternalUrls`
pub const WIKIDATA_URL_KEY: &str = "Wikidata";

/// A partially filled game record. Fields the enricher does not know about
/// (genre, developer and publisher IDs among them) are kept as they are, in
/// their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Stub {
    fields: Map<String, Value>,
}

impl Stub {
    /// Creates a new `Stub` from a JSON value, which must be an object.
    pub fn from_json(j: Value) -> Result<Self, EnricherError> {
        match j {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(EnricherError::StubNotAnObject(other)),
        }
    }

    /// Reads a stub from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, EnricherError> {
        let text = std::fs::read_to_string(path)?;
        let j: Value = serde_json::from_str(&text)?;
        Self::from_json(j)
    }

    /// Writes the stub as pretty-printed JSON, keeping non-ASCII characters as they are.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), EnricherError> {
        std::fs::write(path, self.to_pretty_json()?)?;
        Ok(())
    }

    pub fn to_pretty_json(&self) -> Result<String, EnricherError> {
        Ok(serde_json::to_string_pretty(&self.fields)?)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns a string field, if present and a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// Returns the Wikidata entity ID, if present and not empty.
    pub fn wikidata_key(&self) -> Option<&str> {
        self.get_str(WIKIDATA_KEY).filter(|key| !key.is_empty())
    }

    /// A field is empty when it is absent, `null`, `""`, `[]` or `{}`.
    pub fn is_empty_field(&self, field: &str) -> bool {
        match self.fields.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Array(a)) => a.is_empty(),
            Some(Value::Object(o)) => o.is_empty(),
            Some(_) => false,
        }
    }

    pub fn set<S: Into<String>>(&mut self, field: &str, value: S) {
        self.fields
            .insert(field.to_string(), Value::String(value.into()));
    }

    pub fn set_languages(&mut self, languages: Vec<String>) {
        let languages = languages.into_iter().map(Value::String).collect();
        self.fields
            .insert(LANGUAGES.to_string(), Value::Array(languages));
    }

    /// Adds `url` under `source` in the external URL map unless `source` is
    /// already there. The map is created first if it is missing (or replaced
    /// if it is not a map). Returns true if the URL was added.
    pub fn add_external_url<S: Into<String>>(&mut self, source: &str, url: S) -> bool {
        let entry = self
            .fields
            .entry(EXTERNAL_URLS.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        match entry.as_object_mut() {
            Some(urls) if !urls.contains_key(source) => {
                urls.insert(source.to_string(), Value::String(url.into()));
                true
            }
            _ => false,
        }
    }

    pub fn external_url(&self, source: &str) -> Option<&str> {
        self.fields
            .get(EXTERNAL_URLS)
            .and_then(|urls| urls.get(source))
            .and_then(Value::as_str)
    }

    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
