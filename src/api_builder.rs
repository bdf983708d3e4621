use crate::{
    config::{DEFAULT_LANGUAGE, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT},
    EnricherError, WikidataApi,
};
use std::time::Duration;

#[derive(Debug)]
pub struct WikidataApiBuilder {
    client: Option<reqwest::Client>,
    user_agent: Option<String>,
    api_url: String,
    language: Option<String>,
    timeout: Option<Duration>,
}

impl WikidataApiBuilder {
    /// Sets the action API URL, specifically the URL ending in "api.php". This is mandatory.
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn new<S: Into<String>>(api_url: S) -> Result<Self, EnricherError> {
        let api_url = Self::validate_api_url(&api_url.into())?;
        Ok(Self {
            client: None,
            user_agent: None,
            api_url,
            language: None,
            timeout: None,
        })
    }

    /// Sets the user agent. By default, the user agent is `DEFAULT_USER_AGENT`.
    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the `reqwest::Client`. By default, a new `reqwest::Client` is created.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the language requested for labels and descriptions. Default is "en".
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the per-request timeout. Default is 10 seconds.
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the `WikidataApi`.
    /// The builder gets consumed by this operation.
    pub fn build(self) -> WikidataApi {
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let language = self
            .language
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = self.client.unwrap_or_default();
        WikidataApi::new(client, user_agent, self.api_url, language, timeout)
    }

    /// Checks if the API URL is valid. The URL must end in "api.php".
    /// Removes anything beyond that.
    fn validate_api_url(api_url: &str) -> Result<String, EnricherError> {
        let (base, _rest) = api_url
            .split_once("/api.php")
            .ok_or_else(|| EnricherError::ApiUrlInvalid(api_url.to_owned()))?;
        Ok(format!("{base}/api.php"))
    }
}
