/// Wikidata language items and the two-letter codes the game database uses.
/// Languages not listed here are dropped during enrichment.
pub const LANGUAGE_CODES: [(&str, &str); 15] = [
    ("Q1860", "en"), // English
    ("Q150", "fr"),  // French
    ("Q188", "de"),  // German
    ("Q1321", "es"), // Spanish
    ("Q652", "it"),  // Italian
    ("Q5146", "pt"), // Portuguese
    ("Q7411", "nl"), // Dutch
    ("Q9027", "sv"), // Swedish
    ("Q9056", "cs"), // Czech
    ("Q9058", "pl"), // Polish
    ("Q9292", "az"), // Azerbaijani
    ("Q8748", "zh"), // Chinese
    ("Q5287", "ja"), // Japanese
    ("Q9176", "ko"), // Korean
    ("Q7737", "ru"), // Russian
];

/// Returns the language code for a Wikidata language item ID.
pub fn language_code(entity_id: &str) -> Option<&'static str> {
    LANGUAGE_CODES
        .iter()
        .find(|(id, _)| *id == entity_id)
        .map(|(_, code)| *code)
}

/// Maps language item IDs to codes, keeping order and dropping unknown IDs.
pub fn language_codes<I, S>(entity_ids: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entity_ids
        .into_iter()
        .filter_map(|id| language_code(id.as_ref()))
        .map(|code| code.to_string())
        .collect()
}
