use crate::{
    api_builder::WikidataApiBuilder, entity_source::EntitySource, error::ApiErrorPayload, Entity,
    EnricherError,
};
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::time::Duration;

/// A client for the `wbgetentities` module of the Wikidata action API.
#[derive(Debug, Clone)]
pub struct WikidataApi {
    client: reqwest::Client,
    user_agent: String,
    api_url: String,
    language: String,
    timeout: Duration,
}

impl WikidataApi {
    /// Returns a `WikidataApiBuilder` for the action API URL ending in "api.php".
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn builder<S: Into<String>>(api_url: S) -> Result<WikidataApiBuilder, EnricherError> {
        WikidataApiBuilder::new(api_url)
    }

    pub(crate) const fn new(
        client: reqwest::Client,
        user_agent: String,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            user_agent,
            api_url,
            language,
            timeout,
        }
    }

    /// Returns a `HeaderMap` with the user agent
    fn headers(&self) -> Result<HeaderMap, EnricherError> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::USER_AGENT, self.user_agent.parse()?);
        headers.insert(reqwest::header::ACCEPT, "application/json".parse()?);
        Ok(headers)
    }

    /// Builds the `wbgetentities` GET request for a single entity.
    /// # Errors
    /// Returns an error if the request cannot be built
    pub fn get_entity_request(&self, id: &str) -> Result<reqwest::Request, EnricherError> {
        let params = [
            ("action", "wbgetentities"),
            ("ids", id),
            ("format", "json"),
            ("languages", self.language.as_str()),
        ];
        let request = self
            .client
            .get(&self.api_url)
            .headers(self.headers()?)
            .query(&params)
            .timeout(self.timeout)
            .build()?;
        Ok(request)
    }

    /// Loads one entity.
    /// # Errors
    /// Returns an error on transport failure, a non-success status, an API
    /// error, a missing entity, or a malformed payload.
    pub async fn get_entity(&self, id: &str) -> Result<Entity, EnricherError> {
        let request = self.get_entity_request(id)?;
        let response = self.client.execute(request).await?;
        if !response.status().is_success() {
            return Err(EnricherError::from_response(&response));
        }
        let j: Value = response.json().await?;
        Self::entity_from_response(id, &j)
    }

    fn entity_from_response(id: &str, j: &Value) -> Result<Entity, EnricherError> {
        if let Some(error) = j.get("error") {
            let payload: ApiErrorPayload = serde_json::from_value(error.to_owned())?;
            return Err(EnricherError::ApiError(payload));
        }
        let entity = j
            .get("entities")
            .and_then(|entities| entities.get(id))
            .ok_or_else(|| EnricherError::MissingOrInvalidField {
                field: "entities".into(),
                j: j.to_owned(),
            })?;
        if entity.get("missing").is_some() {
            return Err(EnricherError::MissingEntity(id.to_string()));
        }
        Entity::from_json(entity)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl EntitySource for WikidataApi {
    async fn fetch_entity(&self, id: &str) -> Result<Entity, EnricherError> {
        self.get_entity(id).await
    }
}
