use std::time::Duration;

/// The Wikidata action API endpoint
pub const DEFAULT_API_URL: &str = "https://www.wikidata.org/w/api.php";

/// Identifies this tool to the Wikimedia servers
pub const DEFAULT_USER_AGENT: &str =
    "Win32Emu-GameDB-Bot/1.0 (https://github.com/archanox/Win32Emu)";

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The only locale requested from, and read out of, Wikidata
pub const DEFAULT_LANGUAGE: &str = "en";

/// Prefix of the canonical entity page URL
pub const ENTITY_PAGE_URL: &str = "https://www.wikidata.org/wiki/";

/// The Wikidata properties the enricher knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikidataProperty {
    PublicationDate,
    LanguageOfWork,
    Genre,
    Developer,
    Publisher,
}

impl WikidataProperty {
    /// Properties whose values are reported but not written into the stub,
    /// since the stub expects internal IDs for them.
    pub const CURATED: [WikidataProperty; 3] = [
        WikidataProperty::Genre,
        WikidataProperty::Developer,
        WikidataProperty::Publisher,
    ];

    /// Returns the property ID, eg "P577".
    pub const fn id(&self) -> &'static str {
        match self {
            WikidataProperty::PublicationDate => "P577",
            WikidataProperty::LanguageOfWork => "P407",
            WikidataProperty::Genre => "P136",
            WikidataProperty::Developer => "P178",
            WikidataProperty::Publisher => "P123",
        }
    }

    /// Returns a human-readable plural name, used in log output.
    pub const fn plural_name(&self) -> &'static str {
        match self {
            WikidataProperty::PublicationDate => "Release dates",
            WikidataProperty::LanguageOfWork => "Languages",
            WikidataProperty::Genre => "Genres",
            WikidataProperty::Developer => "Developers",
            WikidataProperty::Publisher => "Publishers",
        }
    }
}

/// Returns the canonical Wikidata page URL for an entity.
pub fn entity_page_url(entity_id: &str) -> String {
    format!("{ENTITY_PAGE_URL}{entity_id}")
}
